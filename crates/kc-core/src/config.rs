//! Configuration management for identity-provider reconciliation.
//!
//! Supports loading configuration from TOML files. Every section has
//! defaults, so an empty document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::version::KeycloakVersion;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target Keycloak server.
    pub keycloak: KeycloakConfig,
    /// Reconciliation defaults.
    pub reconcile: ReconcileConfig,
}

/// Target Keycloak server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeycloakConfig {
    /// Base URL of the Keycloak server.
    pub url: String,
    /// Realm identity providers are reconciled in.
    pub realm: String,
    /// Server version override. When unset, the version reported by the
    /// admin API is used.
    pub version: Option<KeycloakVersion>,
}

/// Defaults applied while building identity-provider records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Provider id used for Google identity providers.
    pub default_provider_id: String,
    /// Scopes requested when none are declared.
    pub default_scopes: String,
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            realm: "master".to_string(),
            version: None,
        }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            default_provider_id: "google".to_string(),
            default_scopes: "openid profile email".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.keycloak.realm.trim().is_empty() {
            return Err(Error::Validation("keycloak.realm must not be empty".to_string()));
        }
        if self.reconcile.default_provider_id.trim().is_empty() {
            return Err(Error::Validation(
                "reconcile.default_provider_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
