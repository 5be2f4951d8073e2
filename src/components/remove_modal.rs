//! Remove confirmation dialog.
//!
//! Captures only the target row's `recipient_name`; the submitted
//! payload is exactly `{action: "remove", recipient_name}` plus the CSRF
//! token added by the API layer.

use leptos::prelude::*;

use crate::form::serialize;
use crate::form::state::RemoveState;
#[cfg(feature = "hydrate")]
use crate::form::state::SubmitOutcome;
use crate::i18n;

/// The remove confirmation dialog. Shown by the page whenever `state`
/// holds a target.
#[component]
pub fn RemoveModal(state: RwSignal<RemoveState>, on_reload: Callback<()>) -> impl IntoView {
    let submitting = move || state.get().submitting;
    let on_cancel = Callback::new(move |()| state.update(RemoveState::close));

    let submit = Callback::new(move |_: ()| {
        let current = state.get_untracked();
        if current.submitting {
            return;
        }
        let Some(name) = current.target else {
            return;
        };
        state.update(RemoveState::begin_submit);
        let payload = serialize::remove_payload(&name);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::mutate(&payload).await {
                    Ok(resp) => {
                        let mut outcome = SubmitOutcome::Stay;
                        state.update(|s| outcome = s.apply_response(&resp));
                        outcome
                    }
                    Err(e) => {
                        leptos::logging::warn!("remove failed: {e}");
                        state.update(RemoveState::fail);
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

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{i18n::REMOVE_TITLE}</h2>
                <p class="dialog__text">
                    {move || {
                        state
                            .get()
                            .target
                            .map(|name| format!("{} \"{name}\"?", i18n::CONFIRM_REMOVE))
                            .unwrap_or_default()
                    }}
                </p>

                <Show when=move || state.get().error.is_some()>
                    <span class="dialog__error">
                        {move || state.get().error.unwrap_or_default()}
                    </span>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {i18n::CANCEL}
                    </button>
                    <button
                        class="btn btn--danger"
                        prop:disabled=submitting
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting() { i18n::SAVING } else { i18n::REMOVE }}
                    </button>
                </div>
            </div>
        </div>
    }
}
