//! # kc-schema
//!
//! Resource schemas and declared documents for Keycloak resources.
//!
//! ## Design
//!
//! A resource is described by an [`AttributeSet`]. Provider variants do not
//! subclass a base resource; they compose one by overlaying their own
//! attribute set on a generic base with [`AttributeSet::merge`].
//!
//! - [`Attribute`] - descriptor for one field (type, flags, default)
//! - [`AttributeSet`] - ordered field name → descriptor map
//! - [`ResourceData`] - a declared document keyed by an attribute set
//! - [`Value`] - a single declared value

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod data;
pub mod error;
pub mod schema;

pub use data::{ResourceData, Value};
pub use error::{SchemaError, SchemaResult};
pub use schema::{Attribute, AttributeSet, AttributeType};
