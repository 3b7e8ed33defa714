//! Error types for the query processor.

use aegis_core::error::AegisError;
use aegis_gateway::GatewayError;

/// Errors from the chat pipeline's internals.
///
/// These never reach the caller of `process`: transport failures degrade to
/// fixed apology strings and persistence failures are logged and swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("record decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ChatError> for AegisError {
    fn from(err: ChatError) -> Self {
        AegisError::Chat(err.to_string())
    }
}
