use anyhow::Result;

use crate::accounts::{CreateAccountPayload, SenAccounts};

/// Create a SEN business account from the given form data.
pub async fn create(
    api: &dyn SenAccounts,
    idempotency_key: String,
    account_number: String,
) -> Result<()> {
    let payload = CreateAccountPayload {
        idempotency_key,
        account_number,
    };
    super::render(api.create_account(&payload).await)
}
