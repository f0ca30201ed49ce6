//! SEN business-account API operations.

mod client;
mod types;

pub use client::{SenAccounts, SenAccountsApi};
pub use types::CreateAccountPayload;

#[cfg(test)]
pub use client::MockSenAccounts;
