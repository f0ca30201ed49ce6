//! CLI actions over the account API.

mod create;
mod instructions;
mod list;
mod show;

pub use create::create;
pub use instructions::instructions;
pub use list::list;
pub use show::show;

use anyhow::Result;
use serde_json::Value;

use crate::http::ApiError;

/// Renders an operation outcome: payloads go to stdout as pretty JSON,
/// normalized errors are printed to stderr and become the command failure.
fn render(outcome: Result<Value, ApiError>) -> Result<()> {
    match outcome {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", serde_json::to_string_pretty(&error.to_value())?);
            Err(error.into())
        }
    }
}
