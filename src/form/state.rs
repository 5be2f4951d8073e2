#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::i18n;
use crate::net::types::{EndpointConfRef, MutationResponse, Recipient};
use crate::templates::{self, FieldDescriptor, TemplateError};

/// Which mutation the open modal will submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    /// The `action` discriminator sent to the mutation endpoint.
    pub fn action(self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "edit",
        }
    }
}

/// Lifecycle of the add/edit modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// One rendered dynamic field with its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub descriptor: FieldDescriptor,
    pub value: String,
}

/// Whether the caller should refresh the table after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// Modal closed; reload the table.
    Reload,
    /// Modal stays open with an inline error; field values are intact.
    Stay,
}

/// State of the add/edit modal: the fixed inputs, the dynamic field set
/// rendered from the selected endpoint's parameter template, and the
/// inline error.
///
/// Created when a modal opens and reset when it closes; never shared
/// between modals. All transitions are synchronous so the flows can be
/// tested without a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipientForm {
    pub mode: FormMode,
    pub phase: ModalPhase,
    pub recipient_name: String,
    /// Selected endpoint configuration; source of `endpoint_conf_name`
    /// in the payload and of the template key.
    pub endpoint: Option<EndpointConfRef>,
    /// Dynamic fields currently rendered inside the template container.
    pub fields: Vec<FormField>,
    /// Localized inline error shown next to the submit control.
    pub error: Option<&'static str>,
    /// Whether the dynamic container is shown (drives the reveal
    /// transition; hidden until a template is rendered).
    pub revealed: bool,
}

impl RecipientForm {
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Open the add modal with no template pre-selected.
    pub fn open_add(&mut self) {
        *self = Self {
            mode: FormMode::Add,
            phase: ModalPhase::Open,
            ..Self::default()
        };
    }

    /// Open the edit modal for `recipient`: resolve its template, render
    /// the fields, and prefill them from `recipient_params` (fields
    /// absent from the params stay empty).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for a stale/unknown endpoint
    /// kind; the modal still opens, with an empty field container.
    pub fn open_edit(&mut self, recipient: &Recipient) -> Result<(), TemplateError> {
        *self = Self {
            mode: FormMode::Edit,
            phase: ModalPhase::Open,
            recipient_name: recipient.recipient_name.clone(),
            endpoint: Some(recipient.endpoint_conf.clone()),
            ..Self::default()
        };
        let fields = templates::resolve(&recipient.endpoint_conf.endpoint_key)?;
        self.fields = fields
            .iter()
            .map(|d| FormField {
                descriptor: *d,
                value: recipient
                    .recipient_params
                    .get(d.name)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();
        self.revealed = true;
        Ok(())
    }

    /// Swap the template after the user picks an endpoint in the add
    /// modal: the field container is cleared and replaced with the
    /// resolved template's fields, all at their default empty value.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown kind; the
    /// selection is kept but the container stays empty and hidden.
    pub fn select_endpoint(&mut self, conf: EndpointConfRef) -> Result<(), TemplateError> {
        self.error = None;
        let resolved = templates::resolve(&conf.endpoint_key);
        self.endpoint = Some(conf);
        match resolved {
            Ok(fields) => {
                self.fields = fields
                    .iter()
                    .map(|d| FormField {
                        descriptor: *d,
                        value: String::new(),
                    })
                    .collect();
                self.revealed = true;
                Ok(())
            }
            Err(e) => {
                self.fields.clear();
                self.revealed = false;
                Err(e)
            }
        }
    }

    pub fn set_recipient_name(&mut self, name: String) {
        self.recipient_name = name;
    }

    /// Update one dynamic field by its payload name.
    pub fn set_field(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.descriptor.name == name) {
            field.value = value;
        }
    }

    /// Current value of a dynamic field, if rendered.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.descriptor.name == name)
            .map(|f| f.value.as_str())
    }

    /// Enter the pending state; clears any previous inline error.
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.phase = ModalPhase::Submitting;
    }

    /// Apply the mutation endpoint's response.
    ///
    /// `OK` closes the modal and resets every field to its default; any
    /// other response keeps the modal open with field values intact and a
    /// localized inline error (generic when the error carries no type).
    pub fn apply_response(&mut self, resp: &MutationResponse) -> SubmitOutcome {
        if resp.is_ok() {
            *self = Self::default();
            return SubmitOutcome::Reload;
        }
        self.phase = ModalPhase::Open;
        self.error = Some(
            resp.error_type()
                .map_or(i18n::REQUEST_FAILED, i18n::error_message),
        );
        SubmitOutcome::Stay
    }

    /// Transport failure or malformed response: keep the modal open with
    /// a generic recoverable error and all field values intact.
    pub fn fail(&mut self) {
        self.phase = ModalPhase::Open;
        self.error = Some(i18n::REQUEST_FAILED);
    }

    /// Dismiss the modal, discarding its form state.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// State of the remove confirmation dialog. Captures only the target's
/// `recipient_name`; no template or dynamic fields are involved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoveState {
    pub target: Option<String>,
    pub submitting: bool,
    pub error: Option<&'static str>,
}

impl RemoveState {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn open(&mut self, recipient_name: String) {
        *self = Self {
            target: Some(recipient_name),
            ..Self::default()
        };
    }

    pub fn begin_submit(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    /// Apply the mutation response: `OK` closes the dialog, anything
    /// else keeps it open with a localized error.
    pub fn apply_response(&mut self, resp: &MutationResponse) -> SubmitOutcome {
        if resp.is_ok() {
            *self = Self::default();
            return SubmitOutcome::Reload;
        }
        self.submitting = false;
        self.error = Some(
            resp.error_type()
                .map_or(i18n::REQUEST_FAILED, i18n::error_message),
        );
        SubmitOutcome::Stay
    }

    pub fn fail(&mut self) {
        self.submitting = false;
        self.error = Some(i18n::REQUEST_FAILED);
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
