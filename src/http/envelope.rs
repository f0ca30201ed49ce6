//! Response envelope handling for the account API.
//!
//! Most endpoints wrap the real payload under a `data` field in the wire
//! body. Some do not, so unwrapping falls back to the full response object.

use serde_json::Value;

/// The outer response structure: HTTP status plus parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    /// Serializes the full response object as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "status": self.status,
            "data": self.data,
        })
    }
}

/// Returns the wire body's `data` payload when present and truthy,
/// otherwise the full response object unmodified.
///
/// On the response object this is the nested `data.data` path: the
/// envelope's `data` holds the body, and the body wraps the payload
/// under one more `data` field.
pub fn unwrap_payload(response: &ApiResponse) -> Value {
    match response.data.get("data") {
        Some(inner) if is_truthy(inner) => inner.clone(),
        _ => response.to_value(),
    }
}

/// Truthiness of a JSON value: null, false, zero and the empty string
/// count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
