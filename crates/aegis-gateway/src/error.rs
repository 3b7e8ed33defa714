//! Error types for the data store gateway.

use aegis_core::error::AegisError;

/// Errors raised by gateway calls.
///
/// Every call is one-shot: there is no retry, batching, or timeout layer
/// here, so a single variant describes each failure mode.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode store response: {0}")]
    Decode(String),
}

impl From<GatewayError> for AegisError {
    fn from(err: GatewayError) -> Self {
        AegisError::Gateway(err.to_string())
    }
}
