use anyhow::Result;

use crate::accounts::SenAccounts;

/// Show a single SEN business account by id.
pub async fn show(api: &dyn SenAccounts, account_id: &str) -> Result<()> {
    super::render(api.get_account(account_id).await)
}
