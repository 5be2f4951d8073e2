//! REST API helpers for the recipients page.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty lists / `Err` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! List fetches degrade to an empty list with a console warning so a flaky
//! backend never breaks hydration; mutations surface a typed [`ApiError`]
//! because the modal flows need to distinguish transport failures from
//! business errors carried inside a well-formed [`MutationResponse`].

#![allow(clippy::unused_async)]

use super::types::{EndpointConfRef, MutationResponse, Payload, Recipient};

/// List endpoint — returns the full recipient set, paginated client-side.
pub const RECIPIENTS_URL: &str = "/api/notifications/recipients";
/// Endpoint-configuration options for the add modal's dropdown.
pub const ENDPOINTS_URL: &str = "/api/notifications/endpoints";
/// Single mutation endpoint, discriminated by the payload's `action` field.
pub const MUTATION_URL: &str = "/api/notifications/recipients/edit";

/// Payload key carrying the anti-forgery token on every mutation.
pub const CSRF_FIELD: &str = "csrf";

/// Failure talking to the mutation endpoint, as opposed to a business
/// error the endpoint reports inside a valid response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("not available on server")]
    Unavailable,
}

/// Fetch all recipients from the list endpoint.
///
/// Returns an empty list on the server or when the request fails.
pub async fn fetch_recipients() -> Vec<Recipient> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(RECIPIENTS_URL).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the selectable endpoint configurations for the add dropdown.
pub async fn fetch_endpoint_confs() -> Vec<EndpointConfRef> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(ENDPOINTS_URL).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(url: &str) -> Vec<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("GET {url} failed: {e}");
            return Vec::new();
        }
    };
    if !resp.ok() {
        leptos::logging::warn!("GET {url} returned {}", resp.status());
        return Vec::new();
    }
    match resp.json::<Vec<T>>().await {
        Ok(list) => list,
        Err(e) => {
            leptos::logging::warn!("GET {url} returned malformed JSON: {e}");
            Vec::new()
        }
    }
}

/// POST a mutation payload, attaching the page's CSRF token.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the endpoint
/// answers with a non-2xx status, or the body is not a valid
/// [`MutationResponse`]. Business failures are reported inside an `Ok`
/// response via `result.error`.
pub async fn mutate(payload: &Payload) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut body = payload.clone();
        match csrf_token() {
            Some(token) => {
                body.insert(CSRF_FIELD.to_owned(), token);
            }
            None => {
                // The serving host is expected to inject the token into
                // the shell's csrf-token meta tag.
                leptos::logging::warn!("no csrf token in page context, posting without one");
            }
        }

        let resp = gloo_net::http::Request::post(MUTATION_URL)
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Transport(format!("status {}", resp.status())));
        }
        resp.json::<MutationResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Read the anti-forgery token from the page's `<meta name="csrf-token">`.
/// An empty `content` means the host never filled the injection point,
/// so it counts as absent.
#[cfg(feature = "hydrate")]
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()?;
    meta.get_attribute("content").filter(|token| !token.is_empty())
}
