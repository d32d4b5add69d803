//! # kc-core
//!
//! Core utilities, configuration, and error handling for Keycloak
//! identity-provider reconciliation.
//!
//! This crate provides foundational types used across the other crates:
//!
//! - [`Error`] / [`Result`] - shared error taxonomy
//! - [`Config`] - reconciliation settings loaded from TOML
//! - [`KeycloakVersion`] - the live server's release version and the
//!   [`is_before`] gate used to select legacy field placement

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use version::{is_before, KeycloakVersion};
