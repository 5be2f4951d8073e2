//! Recipients page — the table plus the add/edit/remove modal flows.
//!
//! The recipient list lives in a `LocalResource` and is always a full
//! reload snapshot; `refetch()` is the sole refresh mechanism after a
//! successful mutation. At most one modal is open at a time: opening
//! either dialog closes the other.

use leptos::prelude::*;

use crate::components::recipient_modal::RecipientModal;
use crate::components::recipients_table::RecipientsTable;
use crate::components::remove_modal::RemoveModal;
use crate::form::state::{RecipientForm, RemoveState};
use crate::i18n;
use crate::net::types::Recipient;
use crate::util::view_prefs;

/// localStorage key suffix for this page's table preferences.
pub const PAGE_ID: &str = "recipients";

/// The notification-recipients admin page.
#[component]
pub fn RecipientsPage() -> impl IntoView {
    // Full-list fetches; pagination and filtering happen client-side.
    let recipients = LocalResource::new(|| crate::net::api::fetch_recipients());
    let endpoints = LocalResource::new(|| crate::net::api::fetch_endpoint_confs());

    // Table view state, restored from and persisted to localStorage.
    let table = RwSignal::new(view_prefs::load(PAGE_ID).unwrap_or_default());
    Effect::new(move || view_prefs::store(PAGE_ID, &table.get()));

    let form = RwSignal::new(RecipientForm::default());
    let remove = RwSignal::new(RemoveState::default());

    let on_add = Callback::new(move |()| {
        remove.update(RemoveState::close);
        form.update(RecipientForm::open_add);
    });

    let on_edit = Callback::new(move |recipient: Recipient| {
        remove.update(RemoveState::close);
        form.update(|f| {
            if let Err(e) = f.open_edit(&recipient) {
                leptos::logging::warn!("{e}");
                f.error = Some(i18n::TEMPLATE_MISSING);
            }
        });
    });

    let on_remove = Callback::new(move |recipient_name: String| {
        form.update(RecipientForm::close);
        remove.update(|s| s.open(recipient_name));
    });

    let on_reload = Callback::new(move |()| recipients.refetch());

    view! {
        <div class="recipients-page">
            <header class="recipients-page__header">
                <h1>{i18n::PAGE_TITLE}</h1>
            </header>

            <Suspense fallback=move || view! { <p>{i18n::LOADING}</p> }>
                {move || {
                    recipients
                        .get()
                        .map(|rows| {
                            view! {
                                <RecipientsTable
                                    rows=rows
                                    table=table
                                    on_add=on_add
                                    on_edit=on_edit
                                    on_remove=on_remove
                                />
                            }
                        })
                }}
            </Suspense>

            <Show when=move || form.get().is_open()>
                <RecipientModal form=form endpoints=endpoints on_reload=on_reload/>
            </Show>

            <Show when=move || remove.get().is_open()>
                <RemoveModal state=remove on_reload=on_reload/>
            </Show>
        </div>
    }
}
