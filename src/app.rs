//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::recipients::RecipientsPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The serving host must inject a `<meta name="csrf-token" content=...>`
/// tag into the head when rendering this shell (the session token is
/// page context the host owns, not application state); `net::api::mutate`
/// reads it for every mutating request. The empty `content` here is the
/// injection point.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="csrf-token" content=""/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/notify-admin.css"/>
        <Title text="Notification Recipients"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RecipientsPage/>
            </Routes>
        </Router>
    }
}
