use thiserror::Error;

/// Top-level error type for the Aegis assistant.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for AegisError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AegisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for AegisError {
    fn from(err: toml::de::Error) -> Self {
        AegisError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AegisError {
    fn from(err: toml::ser::Error) -> Self {
        AegisError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AegisError {
    fn from(err: serde_json::Error) -> Self {
        AegisError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Aegis operations.
pub type Result<T> = std::result::Result<T, AegisError>;
