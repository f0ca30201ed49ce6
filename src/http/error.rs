//! Unified failure type for account API calls.

use serde_json::Value;

use super::envelope::ApiResponse;

/// Every failed request surfaces as one of these two variants, so callers
/// always observe a response-shaped object instead of a transport error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The remote endpoint answered with a non-success status.
    /// Carries the response object (status plus body) as-is.
    Remote(ApiResponse),
    /// No response was received. Carries a serialized representation
    /// of the underlying fault.
    Transport(Value),
}

impl ApiError {
    /// Builds the transport variant from a reqwest error.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        ApiError::Transport(serialize_fault(error))
    }

    /// Serializes either variant as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            ApiError::Remote(response) => response.to_value(),
            ApiError::Transport(fault) => fault.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Remote(response) => {
                write!(f, "API error response with status {}", response.status)
            }
            ApiError::Transport(fault) => {
                let message = fault
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown fault");
                write!(f, "Transport failure: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Serializes a transport fault into a plain JSON object.
fn serialize_fault(error: &reqwest::Error) -> Value {
    serde_json::json!({
        "message": error.to_string(),
        "url": error.url().map(|u| u.to_string()),
        "timeout": error.is_timeout(),
        "connect": error.is_connect(),
    })
}
