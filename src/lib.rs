//! # notify-admin
//!
//! Leptos + WASM admin page for managing notification recipients: named
//! bindings between a recipient and a notification endpoint configuration
//! (email, Slack, webhook, ...), each carrying endpoint-specific parameters.
//!
//! The page renders a paginated recipient table backed by a remote list
//! endpoint and drives add/edit/remove flows through modal dialogs whose
//! parameter fields are generated from a typed template registry keyed by
//! endpoint kind. All mutations go through a single remote endpoint
//! discriminated by an `action` field; after every successful mutation the
//! table is refreshed wholesale from the server.

pub mod app;
pub mod components;
pub mod form;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod templates;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
