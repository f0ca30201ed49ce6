use anyhow::Result;

use crate::accounts::SenAccounts;

/// Show wire instructions for an account, optionally filtered by currency.
pub async fn instructions(
    api: &dyn SenAccounts,
    account_id: &str,
    currency: Option<String>,
) -> Result<()> {
    super::render(api.get_account_instructions(account_id, currency).await)
}
