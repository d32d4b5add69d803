//! Configuration management commands.

use kc_core::KeycloakVersion;

use crate::cli::ConfigCommand;
use crate::config::OutputFormat;
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => {
            apply_setting(config, &key, &value)?;
            config.save()?;
            success(&format!("Set {} = {}", key, value));
            Ok(())
        }
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    match config.default_keycloak_version {
        Some(version) => println!("default_keycloak_version: {}", version),
        None => println!("default_keycloak_version: (latest)"),
    }
    println!("output_format: {:?}", config.output_format);

    Ok(())
}

/// Updates one configuration value in memory.
fn apply_setting(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    match key {
        "default_keycloak_version" | "keycloak_version" | "version" => {
            config.default_keycloak_version = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.parse::<KeycloakVersion>()?)
            };
        }
        "output_format" | "output" => {
            config.output_format = match value.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                "yaml" => OutputFormat::Yaml,
                "quiet" => OutputFormat::Quiet,
                _ => {
                    return Err(crate::CliError::InvalidArgument(format!(
                        "Unknown output format: {}. Supported: table, json, yaml, quiet",
                        value
                    )));
                }
            };
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {}. Known keys: default_keycloak_version, output_format",
                key
            )));
        }
    }
    Ok(())
}
