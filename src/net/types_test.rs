use super::*;

fn response(json: serde_json::Value) -> MutationResponse {
    serde_json::from_value(json).expect("mutation response")
}

// =============================================================
// MutationResponse parsing
// =============================================================

#[test]
fn ok_response_is_ok_without_error() {
    let resp = response(serde_json::json!({"result": {"status": "OK"}}));
    assert!(resp.is_ok());
    assert_eq!(resp.error_type(), None);
}

#[test]
fn typed_error_response_carries_error_type() {
    let resp = response(serde_json::json!({
        "result": {"error": {"type": "recipient_already_existing"}}
    }));
    assert!(!resp.is_ok());
    assert_eq!(resp.error_type(), Some("recipient_already_existing"));
}

#[test]
fn empty_result_is_neither_ok_nor_typed() {
    let resp = response(serde_json::json!({"result": {}}));
    assert!(!resp.is_ok());
    assert_eq!(resp.error_type(), None);
}

#[test]
fn non_ok_status_is_not_ok() {
    let resp = response(serde_json::json!({"result": {"status": "KO"}}));
    assert!(!resp.is_ok());
}

#[test]
fn missing_result_envelope_fails_to_parse() {
    let parsed = serde_json::from_value::<MutationResponse>(serde_json::json!({}));
    assert!(parsed.is_err());
}

// =============================================================
// Recipient parsing
// =============================================================

#[test]
fn recipient_params_default_to_empty_map() {
    let recipient: Recipient = serde_json::from_value(serde_json::json!({
        "recipient_name": "ops-team",
        "endpoint_conf": {
            "endpoint_conf_name": "ops-mail",
            "endpoint_key": "email"
        }
    }))
    .expect("recipient");
    assert_eq!(recipient.recipient_name, "ops-team");
    assert_eq!(recipient.endpoint_conf.endpoint_key, "email");
    assert!(recipient.recipient_params.is_empty());
}

#[test]
fn recipient_params_are_preserved() {
    let recipient: Recipient = serde_json::from_value(serde_json::json!({
        "recipient_name": "ops-team",
        "endpoint_conf": {
            "endpoint_conf_name": "ops-mail",
            "endpoint_key": "email"
        },
        "recipient_params": {"address": "ops@example.com"}
    }))
    .expect("recipient");
    assert_eq!(
        recipient.recipient_params.get("address").map(String::as_str),
        Some("ops@example.com")
    );
}
