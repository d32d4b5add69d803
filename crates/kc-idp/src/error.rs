//! Identity-provider reconciliation errors.

use kc_admin_client::AdminApiError;
use kc_schema::SchemaError;
use thiserror::Error;

/// Failure while merging generic defaults into a variant config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// A free-form extra-config entry names a typed config field.
    #[error("extra config key '{key}' conflicts with a typed identity provider config field")]
    IncompatibleField {
        /// Offending wire key.
        key: String,
    },
}

/// Errors that can occur while reconciling an identity provider.
#[derive(Debug, Error)]
pub enum IdpError {
    /// Default config merge failed. Aborts the whole create/update.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// The declared document does not satisfy the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The admin API call failed.
    #[error(transparent)]
    Api(#[from] AdminApiError),

    /// Import ids look like `{realm}/{alias}`.
    #[error("invalid import id '{0}', expected '{{realm}}/{{alias}}'")]
    InvalidImportId(String),

    /// The document has no id, so it does not refer to a remote object.
    #[error("identity provider has no id; create or import it first")]
    MissingId,
}

impl IdpError {
    /// Checks if the remote identity provider does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}

/// Result type for reconciliation operations.
pub type IdpResult<T> = Result<T, IdpError>;
