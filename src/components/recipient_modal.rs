//! Add/edit modal dialog.
//!
//! The fixed inputs (recipient name, endpoint selection) sit outside the
//! dynamic container; picking an endpoint kind swaps the container's
//! fields from the resolved parameter template with a reveal transition.
//! Submission posts the serialized payload to the mutation endpoint; a
//! typed business error is shown inline next to the submit control with
//! the field values left intact.

use leptos::prelude::*;

use crate::form::serialize;
use crate::form::state::{FormMode, ModalPhase, RecipientForm};
#[cfg(feature = "hydrate")]
use crate::form::state::SubmitOutcome;
use crate::i18n;
use crate::net::types::EndpointConfRef;

/// The add/edit dialog. Shown by the page whenever `form` is open.
#[component]
pub fn RecipientModal(
    form: RwSignal<RecipientForm>,
    endpoints: LocalResource<Vec<EndpointConfRef>>,
    on_reload: Callback<()>,
) -> impl IntoView {
    let title = move || match form.get().mode {
        FormMode::Add => i18n::ADD_TITLE,
        FormMode::Edit => i18n::EDIT_TITLE,
    };
    let submitting = move || form.get().phase == ModalPhase::Submitting;
    let on_cancel = Callback::new(move |()| form.update(RecipientForm::close));

    let submit = Callback::new(move |_: ()| {
        if form.get().phase == ModalPhase::Submitting {
            return;
        }
        form.update(RecipientForm::begin_submit);
        let payload = serialize::payload_for(&form.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::mutate(&payload).await {
                    Ok(resp) => {
                        let mut outcome = SubmitOutcome::Stay;
                        form.update(|f| outcome = f.apply_response(&resp));
                        outcome
                    }
                    Err(e) => {
                        leptos::logging::warn!("mutation failed: {e}");
                        form.update(RecipientForm::fail);
                        SubmitOutcome::Stay
                    }
                };
                if outcome == SubmitOutcome::Reload {
                    on_reload.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &on_reload);
        }
    });

    let on_endpoint_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let Some(list) = endpoints.get() else {
            return;
        };
        let Some(conf) = list.into_iter().find(|c| c.endpoint_conf_name == value) else {
            return;
        };
        form.update(|f| {
            if let Err(e) = f.select_endpoint(conf) {
                leptos::logging::warn!("{e}");
                f.error = Some(i18n::TEMPLATE_MISSING);
            }
        });
    };

    let fields_class = move || {
        if form.get().revealed {
            "recipient-fields recipient-fields--reveal"
        } else {
            "recipient-fields recipient-fields--hidden"
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>

                <label class="dialog__label">
                    {i18n::RECIPIENT_NAME_LABEL}
                    <input
                        class="dialog__input"
                        type="text"
                        name="recipient_name"
                        prop:value=move || form.get().recipient_name.clone()
                        on:input=move |ev| {
                            form.update(|f| f.set_recipient_name(event_target_value(&ev)));
                        }
                    />
                </label>

                <label class="dialog__label">
                    {i18n::ENDPOINT_LABEL}
                    {move || {
                        if form.get().mode == FormMode::Edit {
                            // The endpoint binding is fixed while editing.
                            view! {
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || {
                                        form.get()
                                            .endpoint
                                            .map(|e| e.endpoint_conf_name)
                                            .unwrap_or_default()
                                    }
                                    prop:disabled=true
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <select
                                    class="dialog__input"
                                    name="endpoint"
                                    prop:value=move || {
                                        form.get()
                                            .endpoint
                                            .map(|e| e.endpoint_conf_name)
                                            .unwrap_or_default()
                                    }
                                    on:change=on_endpoint_change
                                >
                                    <option value="">{i18n::SELECT_ENDPOINT}</option>
                                    {move || {
                                        endpoints
                                            .get()
                                            .map(|list| {
                                                list.into_iter()
                                                    .map(|c| {
                                                        let value = c.endpoint_conf_name.clone();
                                                        let label = c.endpoint_conf_name;
                                                        view! {
                                                            <option value=value>{label}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            })
                                    }}
                                </select>
                            }
                                .into_any()
                        }
                    }}
                </label>

                <div class=fields_class>
                    {move || {
                        form.get()
                            .fields
                            .iter()
                            .map(|f| {
                                let name = f.descriptor.name;
                                view! {
                                    <label class="dialog__label">
                                        {f.descriptor.label}
                                        <input
                                            class="dialog__input"
                                            type=f.descriptor.kind.input_type()
                                            name=name
                                            prop:value=f.value.clone()
                                            on:input=move |ev| {
                                                form.update(|fm| {
                                                    fm.set_field(name, event_target_value(&ev));
                                                });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || form.get().error.is_some()>
                    <span class="dialog__error">
                        {move || form.get().error.unwrap_or_default()}
                    </span>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {i18n::CANCEL}
                    </button>
                    <button
                        class="btn btn--primary"
                        prop:disabled=submitting
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting() { i18n::SAVING } else { i18n::SAVE }}
                    </button>
                </div>
            </div>
        </div>
    }
}
