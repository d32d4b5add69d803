//! # kc-model
//!
//! Admin API representations for Keycloak identity providers.
//!
//! These types mirror the JSON exchanged with the Keycloak admin REST API:
//!
//! - [`IdentityProvider`] - the generic identity-provider representation
//! - [`IdentityProviderConfig`] - the provider-specific `config` map
//! - [`KeycloakBoolQuoted`] - a boolean carried as `"true"`/`"false"` on the wire

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod bool_quoted;
pub mod identity_provider;

pub use bool_quoted::KeycloakBoolQuoted;
pub use identity_provider::{IdentityProvider, IdentityProviderConfig};
