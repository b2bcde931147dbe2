// SPDX-License-Identifier: MPL-2.0
//! Message payloads accepted by the notification manager.
//!
//! Producers hand over plain text, Rust errors or arbitrary JSON (typically
//! an API error body). Everything is flattened to a display string before a
//! record is stored, so the store only ever holds text.

use serde_json::{Map, Value};
use std::fmt;

/// Keys searched, in order, for a human readable message inside a JSON object.
const MESSAGE_KEYS: [&str; 3] = ["message", "error", "detail"];

/// Nested paths searched after [`MESSAGE_KEYS`].
const NESTED_MESSAGE_PATHS: [&[&str]; 2] = [&["response", "data", "message"], &["data", "message"]];

/// A notification body before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePayload {
    Text(String),
    /// Display text of a Rust error.
    Error(String),
    /// Arbitrary JSON, e.g. an error response body.
    Structured(Value),
}

impl MessagePayload {
    /// Captures an error through its `Display` implementation.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        MessagePayload::Error(err.to_string())
    }

    /// Flattens the payload into display text.
    ///
    /// Never fails: input with nothing to show becomes an empty string.
    #[must_use]
    pub fn normalize(self) -> String {
        match self {
            MessagePayload::Text(text) | MessagePayload::Error(text) => text,
            MessagePayload::Structured(value) => normalize_value(&value),
        }
    }
}

impl From<&str> for MessagePayload {
    fn from(text: &str) -> Self {
        MessagePayload::Text(text.to_string())
    }
}

impl From<String> for MessagePayload {
    fn from(text: String) -> Self {
        MessagePayload::Text(text)
    }
}

impl From<&String> for MessagePayload {
    fn from(text: &String) -> Self {
        MessagePayload::Text(text.clone())
    }
}

impl From<Value> for MessagePayload {
    fn from(value: Value) -> Self {
        MessagePayload::Structured(value)
    }
}

impl From<crate::error::Error> for MessagePayload {
    fn from(err: crate::error::Error) -> Self {
        MessagePayload::from_error(&err)
    }
}

impl fmt::Display for MessagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clone().normalize())
    }
}

/// Flattens a JSON value into display text.
///
/// Objects without a recognizable message field are rendered as compact
/// JSON; empty objects render as nothing.
#[must_use]
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(normalize_value)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) if map.is_empty() => String::new(),
        Value::Object(map) => extract_message(map).unwrap_or_else(|| value.to_string()),
    }
}

fn extract_message(map: &Map<String, Value>) -> Option<String> {
    let direct = MESSAGE_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find_map(message_from);
    if direct.is_some() {
        return direct;
    }

    NESTED_MESSAGE_PATHS.iter().find_map(|path| {
        path.iter()
            .try_fold(None::<&Value>, |current, key| match current {
                None => map.get(*key).map(Some),
                Some(Value::Object(inner)) => inner.get(*key).map(Some),
                Some(_) => None,
            })
            .flatten()
            .and_then(message_from)
    })
}

fn message_from(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Object(inner) => extract_message(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(MessagePayload::from("Network error").normalize(), "Network error");
    }

    #[test]
    fn rust_errors_use_display() {
        let err = std::io::Error::other("connection reset");
        assert_eq!(MessagePayload::from_error(&err).normalize(), "connection reset");
    }

    #[test]
    fn crate_errors_convert_through_display() {
        let payload: MessagePayload = crate::error::Error::Config("bad field".into()).into();
        assert_eq!(payload.normalize(), "Config Error: bad field");
    }

    #[test]
    fn object_message_field_wins() {
        let value = json!({ "message": "Patient not found", "code": 404 });
        assert_eq!(normalize_value(&value), "Patient not found");
    }

    #[test]
    fn nested_error_object_is_searched() {
        let value = json!({ "error": { "message": "Token expired" } });
        assert_eq!(normalize_value(&value), "Token expired");
    }

    #[test]
    fn response_body_message_is_found() {
        let value = json!({ "response": { "data": { "message": "Duplicate NDC" } } });
        assert_eq!(normalize_value(&value), "Duplicate NDC");
    }

    #[test]
    fn detail_field_is_used_when_message_missing() {
        let value = json!({ "detail": "Rate limited", "message": "" });
        assert_eq!(normalize_value(&value), "Rate limited");
    }

    #[test]
    fn object_without_message_falls_back_to_json() {
        let value = json!({ "code": 500 });
        assert_eq!(normalize_value(&value), r#"{"code":500}"#);
    }

    #[test]
    fn empty_inputs_become_empty_strings() {
        assert_eq!(normalize_value(&Value::Null), "");
        assert_eq!(normalize_value(&json!({})), "");
        assert_eq!(normalize_value(&json!([])), "");
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(normalize_value(&json!(42)), "42");
        assert_eq!(normalize_value(&json!(false)), "false");
    }

    #[test]
    fn arrays_are_joined() {
        let value = json!(["Name is required", { "message": "DOB is invalid" }, null]);
        assert_eq!(normalize_value(&value), "Name is required, DOB is invalid");
    }
}
