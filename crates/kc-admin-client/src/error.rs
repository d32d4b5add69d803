//! Admin API error types.

use thiserror::Error;

/// Errors returned by the admin API.
#[derive(Debug, Error)]
pub enum AdminApiError {
    /// Identity provider not found.
    #[error("identity provider '{alias}' not found in realm '{realm}'")]
    NotFound {
        /// Realm name.
        realm: String,
        /// Provider alias.
        alias: String,
    },

    /// Identity provider alias already taken.
    #[error("identity provider '{alias}' already exists in realm '{realm}'")]
    Duplicate {
        /// Realm name.
        realm: String,
        /// Provider alias.
        alias: String,
    },

    /// The server rejected the representation.
    #[error("invalid identity provider: {0}")]
    InvalidData(String),

    /// Transport failure (connection, timeout, unexpected status).
    #[error("admin API transport error: {0}")]
    Transport(String),
}

impl AdminApiError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(realm: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::NotFound {
            realm: realm.into(),
            alias: alias.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(realm: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Duplicate {
            realm: realm.into(),
            alias: alias.into(),
        }
    }

    /// Checks if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if this is a duplicate error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for admin API operations.
pub type AdminApiResult<T> = Result<T, AdminApiError>;
