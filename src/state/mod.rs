//! Shared client-side state.
//!
//! The recipient list itself lives in the page's `LocalResource` (every
//! refresh is a full reload snapshot from the list endpoint); this module
//! holds the table view state that shapes how that snapshot is displayed.

pub mod table;
