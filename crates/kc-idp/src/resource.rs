//! Identity-provider resource lifecycle.
//!
//! [`IdentityProviderResource`] drives a variant through create, read,
//! update, delete, and import against any [`IdentityProviderApi`]. The
//! server version is queried once per operation and handed to the variant,
//! which decides how the declared document maps onto that release.

use std::collections::BTreeMap;
use std::sync::Arc;

use kc_admin_client::IdentityProviderApi;
use kc_core::KeycloakVersion;
use kc_model::IdentityProvider;
use kc_schema::{AttributeSet, ResourceData, Value};

use crate::base::identity_provider_schema;
use crate::error::{IdpError, IdpResult};

/// A concrete identity-provider type layered on the generic base.
pub trait IdentityProviderVariant: Send + Sync {
    /// Resource type name, e.g. `keycloak_oidc_google_identity_provider`.
    fn resource_type(&self) -> &'static str;

    /// Attributes added to or overriding the generic set.
    fn schema_overlay(&self) -> AttributeSet;

    /// Builds the admin API representation from a declared document.
    ///
    /// ## Errors
    ///
    /// Returns an error if the document cannot be mapped, e.g. when default
    /// config cannot be merged.
    fn extract(&self, data: &ResourceData, keycloak_version: &KeycloakVersion) -> IdpResult<IdentityProvider>;

    /// Writes an admin API representation back into a document.
    fn project(&self, data: &mut ResourceData, provider: &IdentityProvider, keycloak_version: &KeycloakVersion);
}

/// Lifecycle driver for one identity-provider variant.
#[derive(Debug)]
pub struct IdentityProviderResource<V> {
    variant: V,
    schema: Arc<AttributeSet>,
}

impl<V: IdentityProviderVariant> IdentityProviderResource<V> {
    /// Creates the resource, composing the variant overlay onto the generic
    /// attribute set.
    #[must_use]
    pub fn new(variant: V) -> Self {
        let schema = AttributeSet::merge(&identity_provider_schema(), &variant.schema_overlay());
        Self {
            variant,
            schema: Arc::new(schema),
        }
    }

    /// Returns the composed attribute set.
    #[must_use]
    pub fn schema(&self) -> &AttributeSet {
        &self.schema
    }

    /// Returns the variant.
    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Returns an empty document bound to this resource's schema.
    #[must_use]
    pub fn new_data(&self) -> ResourceData {
        ResourceData::new(Arc::clone(&self.schema))
    }

    /// Returns a document holding `values`, bound to this resource's schema.
    #[must_use]
    pub fn data_from_values(&self, values: BTreeMap<String, Value>) -> ResourceData {
        ResourceData::from_values(Arc::clone(&self.schema), values)
    }

    /// Validates `data` and builds the representation that would be sent to
    /// a server of `keycloak_version`. Makes no remote calls.
    ///
    /// ## Errors
    ///
    /// Returns [`IdpError::Schema`] for invalid documents and
    /// [`IdpError::Merge`] if default config cannot be merged.
    pub fn plan(&self, data: &ResourceData, keycloak_version: &KeycloakVersion) -> IdpResult<IdentityProvider> {
        data.validate()?;
        self.variant.extract(data, keycloak_version)
    }

    /// Creates the identity provider and refreshes `data` from the server.
    ///
    /// ## Errors
    ///
    /// Returns an error if the document is invalid, the merge fails, or the
    /// admin API rejects the request. Nothing is sent when extraction fails.
    pub async fn create(&self, api: &dyn IdentityProviderApi, data: &mut ResourceData) -> IdpResult<()> {
        let keycloak_version = api.server_version().await?;
        let provider = self.plan(data, &keycloak_version)?;

        api.create_identity_provider(&provider).await?;
        data.set_id(provider.alias.clone());

        tracing::info!(
            resource = self.variant.resource_type(),
            realm = %provider.realm,
            alias = %provider.alias,
            "identity provider created"
        );

        self.read(api, data).await
    }

    /// Refreshes `data` from the server.
    ///
    /// If the provider no longer exists the id is cleared and `Ok` is
    /// returned, so the caller can plan a re-create.
    ///
    /// ## Errors
    ///
    /// Returns [`IdpError::MissingId`] if `data` has no id, or any admin API
    /// error other than not-found.
    pub async fn read(&self, api: &dyn IdentityProviderApi, data: &mut ResourceData) -> IdpResult<()> {
        let alias = data.id().ok_or(IdpError::MissingId)?.to_string();
        let realm = data.get_string("realm");
        let keycloak_version = api.server_version().await?;

        let mut provider = match api.get_identity_provider(&realm, &alias).await {
            Ok(provider) => provider,
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    resource = self.variant.resource_type(),
                    realm = %realm,
                    alias = %alias,
                    "identity provider not found, removing from state"
                );
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if provider.realm.is_empty() {
            provider.realm = realm;
        }

        self.variant.project(data, &provider, &keycloak_version);
        tracing::debug!(
            resource = self.variant.resource_type(),
            alias = %alias,
            keycloak_version = %keycloak_version,
            "identity provider refreshed"
        );
        Ok(())
    }

    /// Replaces the identity provider and refreshes `data` from the server.
    ///
    /// ## Errors
    ///
    /// Same as [`create`](Self::create), plus [`IdpError::MissingId`].
    pub async fn update(&self, api: &dyn IdentityProviderApi, data: &mut ResourceData) -> IdpResult<()> {
        if data.id().is_none() {
            return Err(IdpError::MissingId);
        }
        let keycloak_version = api.server_version().await?;
        let provider = self.plan(data, &keycloak_version)?;

        api.update_identity_provider(&provider).await?;
        tracing::info!(
            resource = self.variant.resource_type(),
            realm = %provider.realm,
            alias = %provider.alias,
            "identity provider updated"
        );

        self.read(api, data).await
    }

    /// Deletes the identity provider and clears the id.
    ///
    /// ## Errors
    ///
    /// Returns [`IdpError::MissingId`] if `data` has no id, or the admin API
    /// error.
    pub async fn delete(&self, api: &dyn IdentityProviderApi, data: &mut ResourceData) -> IdpResult<()> {
        let alias = data.id().ok_or(IdpError::MissingId)?.to_string();
        let realm = data.get_string("realm");

        api.delete_identity_provider(&realm, &alias).await?;
        data.clear_id();

        tracing::info!(
            resource = self.variant.resource_type(),
            realm = %realm,
            alias = %alias,
            "identity provider deleted"
        );
        Ok(())
    }

    /// Imports an existing identity provider by `{realm}/{alias}`.
    ///
    /// ## Errors
    ///
    /// Returns [`IdpError::InvalidImportId`] for malformed ids and the admin
    /// API error if the provider cannot be read, including not-found.
    pub async fn import(&self, api: &dyn IdentityProviderApi, import_id: &str) -> IdpResult<ResourceData> {
        let (realm, alias) = parse_import_id(import_id)?;
        let keycloak_version = api.server_version().await?;
        let mut provider = api.get_identity_provider(realm, alias).await?;
        if provider.realm.is_empty() {
            provider.realm = realm.to_string();
        }

        let mut data = self.new_data();
        data.set("realm", realm);
        self.variant.project(&mut data, &provider, &keycloak_version);

        tracing::info!(
            resource = self.variant.resource_type(),
            realm = %realm,
            alias = %alias,
            "identity provider imported"
        );
        Ok(data)
    }
}

fn parse_import_id(import_id: &str) -> IdpResult<(&str, &str)> {
    match import_id.split_once('/') {
        Some((realm, alias)) if !realm.is_empty() && !alias.is_empty() && !alias.contains('/') => {
            Ok((realm, alias))
        }
        _ => Err(IdpError::InvalidImportId(import_id.to_string())),
    }
}
