use super::*;

use std::collections::BTreeMap;

use crate::net::types::{EndpointConfRef, MutationResponse, Recipient};

fn email_conf() -> EndpointConfRef {
    EndpointConfRef {
        endpoint_conf_name: "ops-mail".to_owned(),
        endpoint_key: "email".to_owned(),
    }
}

fn slack_conf() -> EndpointConfRef {
    EndpointConfRef {
        endpoint_conf_name: "ops-slack".to_owned(),
        endpoint_key: "slack".to_owned(),
    }
}

fn email_recipient(address: &str) -> Recipient {
    Recipient {
        recipient_name: "ops-team".to_owned(),
        endpoint_conf: email_conf(),
        recipient_params: BTreeMap::from([("address".to_owned(), address.to_owned())]),
    }
}

fn response(json: serde_json::Value) -> MutationResponse {
    serde_json::from_value(json).expect("mutation response")
}

fn ok_response() -> MutationResponse {
    response(serde_json::json!({"result": {"status": "OK"}}))
}

fn error_response(error_type: &str) -> MutationResponse {
    response(serde_json::json!({"result": {"error": {"type": error_type}}}))
}

fn field_names(form: &RecipientForm) -> Vec<&'static str> {
    form.fields.iter().map(|f| f.descriptor.name).collect()
}

// =============================================================
// Add flow
// =============================================================

#[test]
fn default_form_is_closed() {
    let form = RecipientForm::default();
    assert_eq!(form.phase, ModalPhase::Closed);
    assert!(!form.is_open());
    assert!(form.fields.is_empty());
}

#[test]
fn open_add_is_templateless() {
    let mut form = RecipientForm::default();
    form.open_add();
    assert_eq!(form.mode, FormMode::Add);
    assert_eq!(form.phase, ModalPhase::Open);
    assert!(form.endpoint.is_none());
    assert!(form.fields.is_empty());
    assert!(!form.revealed);
}

#[test]
fn selecting_a_kind_renders_exactly_its_template_fields() {
    let mut form = RecipientForm::default();
    form.open_add();

    form.select_endpoint(email_conf()).expect("email template");
    assert_eq!(field_names(&form), vec!["address"]);
    assert!(form.revealed);

    form.select_endpoint(slack_conf()).expect("slack template");
    assert_eq!(field_names(&form), vec!["webhook_url", "channel"]);
    assert!(!field_names(&form).contains(&"address"));
}

#[test]
fn template_swap_discards_previous_values() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.select_endpoint(email_conf()).unwrap();
    form.set_field("address", "ops@example.com".to_owned());

    form.select_endpoint(slack_conf()).unwrap();
    assert_eq!(form.field_value("address"), None);
    assert_eq!(form.field_value("webhook_url"), Some(""));
}

#[test]
fn unknown_kind_keeps_the_container_empty_and_hidden() {
    let mut form = RecipientForm::default();
    form.open_add();
    let conf = EndpointConfRef {
        endpoint_conf_name: "pager".to_owned(),
        endpoint_key: "pagerduty".to_owned(),
    };
    let err = form.select_endpoint(conf).unwrap_err();
    assert_eq!(err, crate::templates::TemplateError::NotFound("pagerduty".to_owned()));
    assert!(form.fields.is_empty());
    assert!(!form.revealed);
    // Selection itself is kept for the fixed payload field.
    assert_eq!(
        form.endpoint.as_ref().map(|e| e.endpoint_conf_name.as_str()),
        Some("pager")
    );
}

// =============================================================
// Edit flow
// =============================================================

#[test]
fn open_edit_prefills_name_and_params() {
    let mut form = RecipientForm::default();
    form.open_edit(&email_recipient("old@example.com"))
        .expect("email template");
    assert_eq!(form.mode, FormMode::Edit);
    assert_eq!(form.phase, ModalPhase::Open);
    assert_eq!(form.recipient_name, "ops-team");
    assert_eq!(form.field_value("address"), Some("old@example.com"));
    assert!(form.revealed);
}

#[test]
fn open_edit_leaves_params_missing_from_the_record_empty() {
    let recipient = Recipient {
        recipient_name: "ops-team".to_owned(),
        endpoint_conf: slack_conf(),
        recipient_params: BTreeMap::from([(
            "webhook_url".to_owned(),
            "https://hooks.example.com/x".to_owned(),
        )]),
    };
    let mut form = RecipientForm::default();
    form.open_edit(&recipient).expect("slack template");
    assert_eq!(
        form.field_value("webhook_url"),
        Some("https://hooks.example.com/x")
    );
    assert_eq!(form.field_value("channel"), Some(""));
}

#[test]
fn open_edit_with_stale_kind_still_opens() {
    let recipient = Recipient {
        recipient_name: "ops-team".to_owned(),
        endpoint_conf: EndpointConfRef {
            endpoint_conf_name: "legacy".to_owned(),
            endpoint_key: "pager_v1".to_owned(),
        },
        recipient_params: BTreeMap::new(),
    };
    let mut form = RecipientForm::default();
    assert!(form.open_edit(&recipient).is_err());
    assert_eq!(form.phase, ModalPhase::Open);
    assert_eq!(form.recipient_name, "ops-team");
    assert!(form.fields.is_empty());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_enters_pending_and_clears_the_inline_error() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.error = Some("stale");
    form.begin_submit();
    assert_eq!(form.phase, ModalPhase::Submitting);
    assert_eq!(form.error, None);
}

#[test]
fn ok_response_closes_the_modal_and_requests_one_reload() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.select_endpoint(email_conf()).unwrap();
    form.set_recipient_name("ops-team".to_owned());
    form.set_field("address", "ops@example.com".to_owned());
    form.begin_submit();

    let outcome = form.apply_response(&ok_response());
    assert_eq!(outcome, SubmitOutcome::Reload);
    // Everything is back at its default for the next open.
    assert_eq!(form, RecipientForm::default());
}

#[test]
fn typed_error_keeps_the_modal_open_with_values_intact() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.select_endpoint(email_conf()).unwrap();
    form.set_recipient_name("ops-team".to_owned());
    form.set_field("address", "ops@example.com".to_owned());
    form.begin_submit();

    let outcome = form.apply_response(&error_response("recipient_already_existing"));
    assert_eq!(outcome, SubmitOutcome::Stay);
    assert_eq!(form.phase, ModalPhase::Open);
    assert_eq!(
        form.error,
        Some(crate::i18n::error_message("recipient_already_existing"))
    );
    assert_eq!(form.recipient_name, "ops-team");
    assert_eq!(form.field_value("address"), Some("ops@example.com"));
}

#[test]
fn untyped_error_shows_the_generic_message() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.begin_submit();
    let outcome = form.apply_response(&response(serde_json::json!({"result": {}})));
    assert_eq!(outcome, SubmitOutcome::Stay);
    assert_eq!(form.error, Some(crate::i18n::REQUEST_FAILED));
}

#[test]
fn transport_failure_is_generic_and_recoverable() {
    let mut form = RecipientForm::default();
    form.open_add();
    form.set_recipient_name("ops-team".to_owned());
    form.begin_submit();
    form.fail();
    assert_eq!(form.phase, ModalPhase::Open);
    assert_eq!(form.error, Some(crate::i18n::REQUEST_FAILED));
    assert_eq!(form.recipient_name, "ops-team");
}

#[test]
fn close_discards_all_form_state() {
    let mut form = RecipientForm::default();
    form.open_edit(&email_recipient("old@example.com")).unwrap();
    form.close();
    assert_eq!(form, RecipientForm::default());
}

// =============================================================
// Remove flow
// =============================================================

#[test]
fn remove_open_captures_only_the_name() {
    let mut state = RemoveState::default();
    assert!(!state.is_open());
    state.open("ops-team".to_owned());
    assert!(state.is_open());
    assert_eq!(state.target.as_deref(), Some("ops-team"));
    assert!(!state.submitting);
}

#[test]
fn remove_ok_closes_and_requests_reload() {
    let mut state = RemoveState::default();
    state.open("ops-team".to_owned());
    state.begin_submit();
    let outcome = state.apply_response(&ok_response());
    assert_eq!(outcome, SubmitOutcome::Reload);
    assert_eq!(state, RemoveState::default());
}

#[test]
fn remove_error_keeps_the_dialog_open() {
    let mut state = RemoveState::default();
    state.open("ops-team".to_owned());
    state.begin_submit();
    let outcome = state.apply_response(&error_response("endpoint_conf_not_found"));
    assert_eq!(outcome, SubmitOutcome::Stay);
    assert!(state.is_open());
    assert!(!state.submitting);
    assert_eq!(
        state.error,
        Some(crate::i18n::error_message("endpoint_conf_not_found"))
    );
}

#[test]
fn remove_transport_failure_is_generic() {
    let mut state = RemoveState::default();
    state.open("ops-team".to_owned());
    state.begin_submit();
    state.fail();
    assert!(state.is_open());
    assert_eq!(state.error, Some(crate::i18n::REQUEST_FAILED));
}
