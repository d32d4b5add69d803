//! Command implementations.

pub mod apply;
pub mod config;
pub mod plan;
pub mod refresh;
pub mod schema;

pub use apply::run_apply;
pub use config::run_config;
pub use plan::run_plan;
pub use refresh::run_refresh;
pub use schema::run_schema;

use std::collections::BTreeMap;
use std::path::Path;

use kc_core::{Config, KeycloakVersion};
use kc_idp::{GoogleIdentityProvider, IdentityProviderResource};
use kc_schema::{ResourceData, Value};

use crate::config::OutputFormat;
use crate::{CliConfig, CliResult};

/// Settings shared by every command, resolved from flags and config files.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reconciliation settings.
    pub settings: Config,
    /// Keycloak release the command targets.
    pub keycloak_version: KeycloakVersion,
    /// Output format.
    pub output: OutputFormat,
}

impl Context {
    /// Resolves the context from command-line overrides and config files.
    pub fn resolve(
        config: &CliConfig,
        settings_path: Option<&Path>,
        arg_version: Option<KeycloakVersion>,
        arg_output: Option<OutputFormat>,
    ) -> CliResult<Self> {
        let settings = match settings_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let keycloak_version = config.effective_version(arg_version, settings.keycloak.version);
        tracing::debug!(keycloak_version = %keycloak_version, "resolved target version");

        Ok(Self {
            settings,
            keycloak_version,
            output: config.effective_output(arg_output),
        })
    }

    /// Builds the Google identity provider resource.
    #[must_use]
    pub fn google_resource(&self) -> IdentityProviderResource<GoogleIdentityProvider> {
        IdentityProviderResource::new(GoogleIdentityProvider::with_defaults(
            self.settings.reconcile.clone(),
        ))
    }

    /// Parses a declared TOML document.
    ///
    /// A document without `realm` targets the configured realm.
    pub fn parse_document(
        &self,
        resource: &IdentityProviderResource<GoogleIdentityProvider>,
        content: &str,
    ) -> CliResult<ResourceData> {
        let mut values: BTreeMap<String, Value> = toml::from_str(content)?;
        values
            .entry("realm".to_string())
            .or_insert_with(|| Value::from(self.settings.keycloak.realm.clone()));
        Ok(resource.data_from_values(values))
    }

    /// Reads and parses a declared TOML document.
    pub fn load_document(
        &self,
        resource: &IdentityProviderResource<GoogleIdentityProvider>,
        path: &Path,
    ) -> CliResult<ResourceData> {
        let content = std::fs::read_to_string(path)?;
        self.parse_document(resource, &content)
    }
}
