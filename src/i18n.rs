//! Static localization table for the recipients page.
//!
//! Single built-in locale. UI strings are plain constants; error-type
//! keys returned by the mutation endpoint go through [`error_message`],
//! which falls back to a generic string for unknown keys so a missing
//! translation never renders an empty error.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

pub const PAGE_TITLE: &str = "Notification Recipients";

// Table strings.
pub const SEARCH: &str = "Search";
pub const ADD_RECIPIENT: &str = "Add recipient";
pub const COLUMN_RECIPIENT: &str = "Recipient";
pub const COLUMN_ENDPOINT: &str = "Endpoint";
pub const COLUMN_ACTIONS: &str = "Actions";
pub const EDIT: &str = "Edit";
pub const REMOVE: &str = "Remove";
pub const LOADING: &str = "Loading recipients...";
pub const CREATE_ENDPOINT_FIRST: &str =
    "No recipients yet. Create an endpoint configuration first, then add a recipient here.";
pub const NO_MATCHING_ROWS: &str = "No matching recipients.";

// Modal strings.
pub const ADD_TITLE: &str = "Add Recipient";
pub const EDIT_TITLE: &str = "Edit Recipient";
pub const REMOVE_TITLE: &str = "Remove Recipient";
pub const RECIPIENT_NAME_LABEL: &str = "Recipient name";
pub const ENDPOINT_LABEL: &str = "Endpoint configuration";
pub const SELECT_ENDPOINT: &str = "Select an endpoint...";
pub const CANCEL: &str = "Cancel";
pub const SAVE: &str = "Save";
pub const SAVING: &str = "Saving...";
pub const CONFIRM_REMOVE: &str = "Remove the recipient";

/// Inline notice when an endpoint kind has no declared template.
pub const TEMPLATE_MISSING: &str =
    "No parameter template is available for this endpoint kind.";

/// Generic recoverable failure shown when the endpoint reports no typed
/// error (transport failure, malformed or untyped response).
pub const REQUEST_FAILED: &str = "The request could not be completed. Please try again.";

/// Localized messages for the error-type keys the mutation endpoint
/// returns inside `result.error.type`.
const ERRORS: &[(&str, &str)] = &[
    (
        "recipient_already_existing",
        "A recipient with this name already exists.",
    ),
    (
        "invalid_recipient_params",
        "One or more endpoint parameters are invalid.",
    ),
    (
        "endpoint_conf_not_found",
        "The selected endpoint configuration no longer exists.",
    ),
];

/// Look up the display string for a typed error key.
///
/// Unknown keys fall back to [`REQUEST_FAILED`].
pub fn error_message(error_type: &str) -> &'static str {
    ERRORS
        .iter()
        .find(|(key, _)| *key == error_type)
        .map_or(REQUEST_FAILED, |(_, msg)| msg)
}

/// "Showing x to y of z" summary line under the table.
pub fn showing_rows(first: usize, last: usize, total: usize) -> String {
    format!("Showing {first} to {last} of {total} recipients")
}
