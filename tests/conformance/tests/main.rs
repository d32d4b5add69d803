//! Identity Provider Conformance Test Suite
//!
//! This test suite checks Google identity-provider reconciliation against
//! the admin API contract of each supported Keycloak release.
//!
//! ## Test Areas
//!
//! - Round trip (declared document -> representation -> declared document)
//! - Version gate (login page visibility before and after Keycloak 26)
//! - Lifecycle (create, read, update, delete, import)
//! - Wire encoding (quoted booleans, flattened extra config)
//!
//! ## Running Tests
//!
//! Run all conformance tests:
//! ```bash
//! cargo test -p kc-idp-conformance
//! ```
//!
//! Run one area:
//! ```bash
//! cargo test -p kc-idp-conformance version_gate
//! ```

mod harness;
mod lifecycle;
mod round_trip;
mod version_gate;
mod wire_encoding;
