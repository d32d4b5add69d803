//! Schema error types.

use thiserror::Error;

use crate::schema::AttributeType;

/// Errors raised while checking a declared document against its schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A required attribute has no value.
    #[error("missing required attribute '{0}'")]
    MissingRequired(String),

    /// A value does not match the attribute's type.
    #[error("attribute '{attribute}' expects a {expected} value")]
    TypeMismatch {
        /// Attribute name.
        attribute: String,
        /// Declared attribute type.
        expected: AttributeType,
    },

    /// The document names an attribute the schema does not define.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// A value is outside the attribute's allowed set.
    #[error("attribute '{attribute}' must be one of [{allowed}], got '{value}'")]
    NotAllowed {
        /// Attribute name.
        attribute: String,
        /// Rejected value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
