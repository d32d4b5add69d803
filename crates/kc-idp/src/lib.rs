//! # kc-idp
//!
//! Identity-provider reconciliation for Keycloak.
//!
//! Translates a declared identity-provider document into the admin API
//! representation and back, across server releases whose contract differs.
//!
//! ## Layout
//!
//! - [`base`] - attributes and mapping shared by every identity provider
//! - [`google`] - the Google OIDC variant, composed on top of [`base`]
//! - [`merge`] - non-destructive merge of generic defaults into variant config
//! - [`compat`] - table of fields relocated between Keycloak releases
//! - [`resource`] - create/read/update/delete/import lifecycle

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod base;
pub mod compat;
pub mod error;
pub mod google;
pub mod merge;
pub mod resource;

pub use error::{IdpError, IdpResult, MergeError};
pub use google::GoogleIdentityProvider;
pub use resource::{IdentityProviderResource, IdentityProviderVariant};
