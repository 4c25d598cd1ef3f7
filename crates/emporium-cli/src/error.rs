//! CLI error types.

use thiserror::Error;

use emporium_core::EmporiumError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transform or table failure.
    #[error(transparent)]
    Emporium(#[from] EmporiumError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
