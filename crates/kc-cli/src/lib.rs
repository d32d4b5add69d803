//! # kc-cli
//!
//! CLI tools for Keycloak identity-provider reconciliation.
//!
//! This crate provides command-line utilities for:
//! - Inspecting the Google identity-provider attribute set
//! - Planning the admin API representation for a declared document
//! - Refreshing a declared document from an admin API representation
//! - Dry-run create/read against an in-memory admin API

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
