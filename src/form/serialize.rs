//! Builds the flat mutation payload from a modal's rendered field set.

#[cfg(test)]
#[path = "serialize_test.rs"]
mod serialize_test;

use super::state::RecipientForm;
use crate::net::types::Payload;

/// Payload key for the `action` discriminator.
pub const ACTION_FIELD: &str = "action";
/// Fixed payload key carrying the recipient's name.
pub const RECIPIENT_NAME_FIELD: &str = "recipient_name";
/// Fixed payload key carrying the selected endpoint configuration name.
pub const ENDPOINT_CONF_NAME_FIELD: &str = "endpoint_conf_name";

/// Serialize the form's current field set into a flat payload.
///
/// Every dynamic field currently rendered contributes its trimmed value;
/// the two fixed keys are always present, taken from the fixed inputs
/// outside the template container and passed through untrimmed. With no
/// endpoint selected yet the payload contains exactly the two fixed
/// keys.
pub fn serialize(form: &RecipientForm) -> Payload {
    let mut payload = Payload::new();
    for field in &form.fields {
        payload.insert(
            field.descriptor.name.to_owned(),
            field.value.trim().to_owned(),
        );
    }
    payload.insert(
        RECIPIENT_NAME_FIELD.to_owned(),
        form.recipient_name.clone(),
    );
    payload.insert(
        ENDPOINT_CONF_NAME_FIELD.to_owned(),
        form.endpoint
            .as_ref()
            .map(|e| e.endpoint_conf_name.clone())
            .unwrap_or_default(),
    );
    payload
}

/// [`serialize`] plus the flow's `action` tag (`"add"` or `"edit"`).
pub fn payload_for(form: &RecipientForm) -> Payload {
    let mut payload = serialize(form);
    payload.insert(ACTION_FIELD.to_owned(), form.mode.action().to_owned());
    payload
}

/// The remove flow's payload: exactly `action` and `recipient_name`,
/// never endpoint or parameter fields.
pub fn remove_payload(recipient_name: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert(ACTION_FIELD.to_owned(), "remove".to_owned());
    payload.insert(RECIPIENT_NAME_FIELD.to_owned(), recipient_name.to_owned());
    payload
}
