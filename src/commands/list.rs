use anyhow::Result;

use crate::accounts::SenAccounts;

/// List SEN business accounts.
pub async fn list(api: &dyn SenAccounts) -> Result<()> {
    super::render(api.list_accounts().await)
}
