//! CLI configuration.

use std::path::PathBuf;

use kc_core::KeycloakVersion;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Keycloak release targeted when neither the flag nor the settings
    /// file names one.
    pub default_keycloak_version: Option<KeycloakVersion>,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Loads configuration from file.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML.
    pub fn from_toml_str(content: &str) -> crate::CliResult<Self> {
        toml::from_str(content)
            .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| crate::CliError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".keycloak").join("kc-idp.toml"))
    }

    /// Gets the effective Keycloak version.
    ///
    /// Precedence: command-line flag, settings file, this config, then the
    /// newest release with known field placement.
    #[must_use]
    pub fn effective_version(
        &self,
        arg_version: Option<KeycloakVersion>,
        settings_version: Option<KeycloakVersion>,
    ) -> KeycloakVersion {
        arg_version
            .or(settings_version)
            .or(self.default_keycloak_version)
            .unwrap_or(KeycloakVersion::V26)
    }

    /// Gets the effective output format.
    #[must_use]
    pub fn effective_output(&self, arg_output: Option<OutputFormat>) -> OutputFormat {
        arg_output.unwrap_or(self.output_format)
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Quiet (minimal output).
    Quiet,
}
