#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

/// Flat string-keyed body sent to the mutation endpoint.
///
/// `BTreeMap` keeps key order deterministic, which matters for nothing on
/// the wire but keeps test assertions stable.
pub type Payload = BTreeMap<String, String>;

/// A named notification target bound to one endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Recipient {
    pub recipient_name: String,
    pub endpoint_conf: EndpointConfRef,
    #[serde(default)]
    pub recipient_params: BTreeMap<String, String>,
}

/// Reference to a reusable endpoint configuration.
///
/// `endpoint_key` selects which parameter template applies;
/// `endpoint_conf_name` is the human-facing label shown in the table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EndpointConfRef {
    pub endpoint_conf_name: String,
    pub endpoint_key: String,
}

/// Envelope returned by the mutation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct MutationResponse {
    pub result: MutationResult,
}

/// Either `status: "OK"` or a typed error; both may be absent in a
/// malformed reply, which callers treat as a generic failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct MutationResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<MutationError>,
}

/// Typed business error; `type` is a key into the localization table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct MutationError {
    #[serde(rename = "type")]
    pub error_type: String,
}

impl MutationResponse {
    /// True when the mutation was accepted.
    pub fn is_ok(&self) -> bool {
        self.result.status.as_deref() == Some("OK")
    }

    /// The typed error key, if the endpoint returned one.
    pub fn error_type(&self) -> Option<&str> {
        self.result.error.as_ref().map(|e| e.error_type.as_str())
    }
}
