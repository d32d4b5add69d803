//! # kc-admin-client
//!
//! Admin API abstraction for Keycloak identity providers.
//!
//! Reconciliation code talks to Keycloak only through
//! [`IdentityProviderApi`]. The HTTP transport lives outside this workspace;
//! [`InMemoryAdminApi`] is a process-local implementation for tests and
//! dry runs.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod api;
pub mod error;
pub mod memory;

pub use api::IdentityProviderApi;
pub use error::{AdminApiError, AdminApiResult};
pub use memory::InMemoryAdminApi;
