use async_trait::async_trait;
use serde_json::Value;

use crate::http::{ApiClient, ApiError};

use super::types::CreateAccountPayload;

const ACCOUNTS_PATH: &str = "/v1/businessAccount/banks/sen";

/// The SEN business-account API surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SenAccounts: Send + Sync {
    async fn create_account(&self, payload: &CreateAccountPayload) -> Result<Value, ApiError>;
    async fn list_accounts(&self) -> Result<Value, ApiError>;
    async fn get_account(&self, account_id: &str) -> Result<Value, ApiError>;
    async fn get_account_instructions(
        &self,
        account_id: &str,
        currency: Option<String>,
    ) -> Result<Value, ApiError>;
}

/// Client for the SEN business-account endpoints.
pub struct SenAccountsApi {
    transport: ApiClient,
}

impl SenAccountsApi {
    pub fn new(transport: ApiClient) -> Self {
        Self { transport }
    }

    /// Returns the shared transport instance.
    pub fn transport(&self) -> &ApiClient {
        &self.transport
    }
}

#[async_trait]
impl SenAccounts for SenAccountsApi {
    /// Creates a SEN business account. The payload fields are the caller's
    /// contract; no local validation is performed.
    #[tracing::instrument(skip(self, payload))]
    async fn create_account(&self, payload: &CreateAccountPayload) -> Result<Value, ApiError> {
        self.transport.post(ACCOUNTS_PATH, payload).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_accounts(&self) -> Result<Value, ApiError> {
        self.transport.get(ACCOUNTS_PATH, &[]).await
    }

    /// Fetches one account. `account_id` is interpolated into the path
    /// as-is; the caller supplies a valid path segment.
    #[tracing::instrument(skip(self))]
    async fn get_account(&self, account_id: &str) -> Result<Value, ApiError> {
        let path = format!("{}/{}", ACCOUNTS_PATH, account_id);
        self.transport.get(&path, &[]).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_account_instructions(
        &self,
        account_id: &str,
        currency: Option<String>,
    ) -> Result<Value, ApiError> {
        let path = format!("{}/{}/instructions", ACCOUNTS_PATH, account_id);
        match null_if_empty(currency.as_deref()) {
            Some(currency) => self.transport.get(&path, &[("currency", currency)]).await,
            None => self.transport.get(&path, &[]).await,
        }
    }
}

/// Treats values that trim to the empty string as absent, so semantically
/// meaningless empty filters are never sent to the remote service.
fn null_if_empty(prop: Option<&str>) -> Option<&str> {
    match prop {
        Some(value) if value.trim().is_empty() => None,
        other => other,
    }
}
