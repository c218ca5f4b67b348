//! CLI error types
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read, parsed, or validated
    #[error("configuration error: {0}")]
    Config(String),

    /// Store could not be opened or initialized
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to start or crashed
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

impl CliError {
    /// Configuration error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
