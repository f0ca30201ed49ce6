use serde::{Deserialize, Serialize};

/// Form data for creating a SEN business account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountPayload {
    /// Client-generated uniqueness token so a retried creation request
    /// is not duplicated remotely.
    pub idempotency_key: String,
    pub account_number: String,
}
