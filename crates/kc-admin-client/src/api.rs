//! Identity provider admin API trait.

use async_trait::async_trait;
use kc_core::KeycloakVersion;
use kc_model::IdentityProvider;

use crate::error::AdminApiResult;

/// Admin API operations on identity providers.
///
/// Implementations must be thread-safe. Timeouts, retries, and
/// cancellation belong to the implementation, not to callers.
#[async_trait]
pub trait IdentityProviderApi: Send + Sync {
    /// Returns the release version reported by the server.
    async fn server_version(&self) -> AdminApiResult<KeycloakVersion>;

    /// Creates an identity provider in `provider.realm`.
    ///
    /// ## Errors
    ///
    /// Returns `AdminApiError::Duplicate` if the alias is taken.
    async fn create_identity_provider(&self, provider: &IdentityProvider) -> AdminApiResult<()>;

    /// Gets an identity provider by alias.
    ///
    /// ## Errors
    ///
    /// Returns `AdminApiError::NotFound` if the provider doesn't exist.
    async fn get_identity_provider(&self, realm: &str, alias: &str) -> AdminApiResult<IdentityProvider>;

    /// Replaces an existing identity provider.
    ///
    /// ## Errors
    ///
    /// Returns `AdminApiError::NotFound` if the provider doesn't exist.
    async fn update_identity_provider(&self, provider: &IdentityProvider) -> AdminApiResult<()>;

    /// Deletes an identity provider by alias.
    ///
    /// ## Errors
    ///
    /// Returns `AdminApiError::NotFound` if the provider doesn't exist.
    async fn delete_identity_provider(&self, realm: &str, alias: &str) -> AdminApiResult<()>;
}
