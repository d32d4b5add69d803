//! In-memory admin API.
//!
//! Behaves like a Keycloak server of a fixed version for the parts of the
//! identity-provider contract reconciliation depends on:
//!
//! - `internalId` is assigned on create and preserved on update
//! - secrets are masked on read
//! - Keycloak 26+ drops `config.hideOnLoginPage`; older servers ignore the
//!   top-level `hideOnLogin`

use std::collections::HashMap;

use async_trait::async_trait;
use kc_core::KeycloakVersion;
use kc_model::IdentityProvider;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::api::IdentityProviderApi;
use crate::error::{AdminApiError, AdminApiResult};

/// Value Keycloak returns in place of stored secrets.
pub const MASKED_SECRET: &str = "**********";

/// In-memory identity provider store keyed by `(realm, alias)`.
#[derive(Debug)]
pub struct InMemoryAdminApi {
    version: KeycloakVersion,
    providers: RwLock<HashMap<(String, String), IdentityProvider>>,
}

impl InMemoryAdminApi {
    /// Creates an empty store reporting `version`.
    #[must_use]
    pub fn new(version: KeycloakVersion) -> Self {
        Self {
            version,
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the stored representation, unmasked. Test helper.
    #[must_use]
    pub fn stored(&self, realm: &str, alias: &str) -> Option<IdentityProvider> {
        self.providers
            .read()
            .get(&(realm.to_string(), alias.to_string()))
            .cloned()
    }

    /// Returns the number of stored providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    /// Applies the server's version-specific normalization to an incoming
    /// representation.
    fn normalize(&self, provider: &IdentityProvider) -> IdentityProvider {
        let mut stored = provider.clone();
        if self.version.is_before(&KeycloakVersion::V26) {
            stored.hide_on_login = None;
        } else {
            stored.config.hide_on_login_page = None;
        }
        stored
    }

    fn key(provider: &IdentityProvider) -> (String, String) {
        (provider.realm.clone(), provider.alias.clone())
    }
}

#[async_trait]
impl IdentityProviderApi for InMemoryAdminApi {
    async fn server_version(&self) -> AdminApiResult<KeycloakVersion> {
        Ok(self.version)
    }

    async fn create_identity_provider(&self, provider: &IdentityProvider) -> AdminApiResult<()> {
        if provider.alias.is_empty() {
            return Err(AdminApiError::InvalidData("alias must not be empty".to_string()));
        }

        let mut providers = self.providers.write();
        let key = Self::key(provider);
        if providers.contains_key(&key) {
            return Err(AdminApiError::duplicate(&provider.realm, &provider.alias));
        }

        let mut stored = self.normalize(provider);
        stored.internal_id = Uuid::new_v4().to_string();
        tracing::debug!(
            realm = %stored.realm,
            alias = %stored.alias,
            internal_id = %stored.internal_id,
            "identity provider stored"
        );
        providers.insert(key, stored);
        Ok(())
    }

    async fn get_identity_provider(&self, realm: &str, alias: &str) -> AdminApiResult<IdentityProvider> {
        let mut provider = self
            .stored(realm, alias)
            .ok_or_else(|| AdminApiError::not_found(realm, alias))?;
        if !provider.config.client_secret.is_empty() {
            provider.config.client_secret = MASKED_SECRET.to_string();
        }
        Ok(provider)
    }

    async fn update_identity_provider(&self, provider: &IdentityProvider) -> AdminApiResult<()> {
        let mut providers = self.providers.write();
        let key = Self::key(provider);
        let existing = providers
            .get(&key)
            .ok_or_else(|| AdminApiError::not_found(&provider.realm, &provider.alias))?;

        let mut stored = self.normalize(provider);
        stored.internal_id.clone_from(&existing.internal_id);
        providers.insert(key, stored);
        Ok(())
    }

    async fn delete_identity_provider(&self, realm: &str, alias: &str) -> AdminApiResult<()> {
        self.providers
            .write()
            .remove(&(realm.to_string(), alias.to_string()))
            .map(|_| ())
            .ok_or_else(|| AdminApiError::not_found(realm, alias))
    }
}
