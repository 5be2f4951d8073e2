//! Persistence of table view preferences (filter/sort/page) in
//! `localStorage`, keyed by a page identifier so each admin page keeps
//! its own state across full-page sessions. Requires a browser
//! environment; on the server both operations are no-ops.

use crate::state::table::TableState;

#[cfg(feature = "hydrate")]
const STORAGE_PREFIX: &str = "notify_admin.table.";

/// Load the persisted table state for a page, if any.
///
/// Returns `None` on the server, when nothing is stored, or when the
/// stored value no longer parses (stale format after an upgrade).
pub fn load(page_id: &str) -> Option<TableState> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(&format!("{STORAGE_PREFIX}{page_id}")).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page_id;
        None
    }
}

/// Persist the table state for a page. Failures are ignored; view
/// preferences are best-effort.
pub fn store(page_id: &str, state: &TableState) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw) = serde_json::to_string(state) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(&format!("{STORAGE_PREFIX}{page_id}"), &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page_id, state);
    }
}
