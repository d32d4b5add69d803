//! # kc-idp
//!
//! Command-line tool for Keycloak Google identity providers.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use kc_cli::{
    cli::{Cli, Command},
    commands::{run_apply, run_config, run_plan, run_refresh, run_schema, Context},
    config::CliConfig,
    output::error,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let context = match Context::resolve(
        &config,
        cli.config.as_deref(),
        cli.keycloak_version,
        cli.output,
    ) {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load settings: {}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Command::Schema => run_schema(&context),
        Command::Plan(args) => run_plan(&args, &context),
        Command::Refresh(args) => run_refresh(&args, &context),
        Command::Apply(args) => run_apply(&args, &context).await,
        Command::Config(cmd) => run_config(cmd, &mut config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
