//! Typed registry of parameter templates, one per endpoint kind.
//!
//! Each template declares the input fields an endpoint configuration of
//! that kind requires. Templates are immutable, declared ahead of time,
//! and shared read-only across all open modals; resolution is a pure
//! lookup and an unknown key is an explicit [`TemplateError::NotFound`]
//! rather than a silent empty render.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

/// Input widget kind for one dynamic field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Password,
}

impl FieldKind {
    /// The HTML `type` attribute for this kind's `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Password => "password",
        }
    }
}

/// One declared input field inside a parameter template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Payload key for the field value.
    pub name: &'static str,
    /// Human-facing label.
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor { name, label, kind }
}

const EMAIL_FIELDS: &[FieldDescriptor] = &[field("address", "Email address", FieldKind::Email)];

const SLACK_FIELDS: &[FieldDescriptor] = &[
    field("webhook_url", "Webhook URL", FieldKind::Url),
    field("channel", "Channel", FieldKind::Text),
];

const WEBHOOK_FIELDS: &[FieldDescriptor] = &[
    field("url", "URL", FieldKind::Url),
    field("shared_secret", "Shared secret", FieldKind::Password),
];

const DISCORD_FIELDS: &[FieldDescriptor] = &[
    field("webhook_url", "Webhook URL", FieldKind::Url),
    field("username", "Bot username", FieldKind::Text),
];

const REGISTRY: &[(&str, &[FieldDescriptor])] = &[
    ("email", EMAIL_FIELDS),
    ("slack", SLACK_FIELDS),
    ("webhook", WEBHOOK_FIELDS),
    ("discord", DISCORD_FIELDS),
];

/// Unknown endpoint kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("no parameter template for endpoint kind `{0}`")]
    NotFound(String),
}

/// Look up the parameter template for an endpoint kind.
///
/// # Errors
///
/// Returns [`TemplateError::NotFound`] when no template is declared for
/// `endpoint_key`.
pub fn resolve(endpoint_key: &str) -> Result<&'static [FieldDescriptor], TemplateError> {
    REGISTRY
        .iter()
        .find(|(key, _)| *key == endpoint_key)
        .map(|(_, fields)| *fields)
        .ok_or_else(|| TemplateError::NotFound(endpoint_key.to_owned()))
}

/// All declared endpoint kinds, in registry order.
pub fn endpoint_keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(key, _)| *key)
}
