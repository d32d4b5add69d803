//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kc_core::KeycloakVersion;

use crate::config::OutputFormat;

/// kc-idp - Plan and apply Keycloak Google identity providers.
#[derive(Debug, Parser)]
#[command(name = "kc-idp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Keycloak release to target (overrides config).
    #[arg(short = 'k', long, env = "KC_KEYCLOAK_VERSION")]
    pub keycloak_version: Option<KeycloakVersion>,

    /// Reconciliation settings file (TOML).
    #[arg(short, long, env = "KC_IDP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Google identity provider attribute set.
    Schema,

    /// Build the admin API representation for a declared document.
    Plan(DocumentArgs),

    /// Project an admin API representation back into declared attributes.
    Refresh(RecordArgs),

    /// Create the provider against an in-memory server and print the
    /// refreshed state.
    Apply(DocumentArgs),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for commands reading a declared document.
#[derive(Debug, clap::Args)]
pub struct DocumentArgs {
    /// Declared document (TOML).
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for commands reading an admin API representation.
#[derive(Debug, clap::Args)]
pub struct RecordArgs {
    /// Identity provider representation (JSON).
    #[arg(short, long)]
    pub file: PathBuf,

    /// Realm the representation belongs to.
    #[arg(short, long, env = "KC_REALM")]
    pub realm: Option<String>,
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },
}
