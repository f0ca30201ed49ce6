//! Hostname resolution for the account API.

use std::env;

/// Host used when no override is supplied.
const SANDBOX_HOST: &str = "https://api-sandbox.circle.com";

/// Resolves the base API host address, honoring the SEN_API_HOST
/// environment variable.
pub fn api_hostname() -> String {
    resolve(env::var("SEN_API_HOST"))
}

fn resolve(var: Result<String, env::VarError>) -> String {
    var.unwrap_or_else(|_| SANDBOX_HOST.to_string())
}
