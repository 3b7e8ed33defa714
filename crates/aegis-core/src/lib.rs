pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::AegisConfig;
pub use error::{AegisError, Result};
pub use types::*;
