//! HTTP transport with response/error normalization.

mod client;
mod envelope;
mod error;

pub use client::ApiClient;
pub use envelope::{ApiResponse, unwrap_payload};
pub use error::ApiError;
