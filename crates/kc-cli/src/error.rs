//! CLI error types.

use kc_idp::IdpError;
use kc_schema::SchemaError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reconciliation settings error.
    #[error(transparent)]
    Core(#[from] kc_core::Error),

    /// Reconciliation error.
    #[error(transparent)]
    Idp(#[from] IdpError),

    /// Declared document error.
    #[error("invalid document: {0}")]
    Schema(#[from] SchemaError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
