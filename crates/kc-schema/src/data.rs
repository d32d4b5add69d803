//! Declared resource documents.
//!
//! [`ResourceData`] holds what the user declared for one resource instance,
//! keyed by the resource's [`AttributeSet`]. Reads fall back to the schema
//! default and then to the attribute type's zero value, so a reader never
//! has to distinguish "not declared" from "declared as default".

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{AttributeSet, AttributeType};

/// A single declared value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Integer. Parsed from documents so a bare number is reported as a
    /// type mismatch instead of a parse failure; no attribute accepts it.
    Int(i64),
    /// String.
    String(String),
    /// String map.
    Map(BTreeMap<String, String>),
}

impl Value {
    /// Returns true if this is the zero value of its type.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::String(s) => s.is_empty(),
            Self::Map(m) => m.is_empty(),
        }
    }

    /// Returns the string, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BTreeMap<String, String>> for Value {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Map(value)
    }
}

/// Declared state of one resource instance.
#[derive(Clone)]
pub struct ResourceData {
    schema: Arc<AttributeSet>,
    id: Option<String>,
    values: BTreeMap<String, Value>,
}

impl ResourceData {
    /// Creates an empty document for `schema`.
    #[must_use]
    pub fn new(schema: Arc<AttributeSet>) -> Self {
        Self {
            schema,
            id: None,
            values: BTreeMap::new(),
        }
    }

    /// Creates a document from already-parsed values.
    ///
    /// Values are not checked here; call [`validate`](Self::validate).
    #[must_use]
    pub fn from_values(schema: Arc<AttributeSet>, values: BTreeMap<String, Value>) -> Self {
        Self {
            schema,
            id: None,
            values,
        }
    }

    /// Returns the schema this document is keyed by.
    #[must_use]
    pub fn schema(&self) -> &AttributeSet {
        &self.schema
    }

    /// Returns the resource id, if the resource exists remotely.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the resource id. An empty id marks the resource as gone.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
    }

    /// Clears the resource id.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Returns the effective value of `key`: the declared value, else the
    /// schema default, else the zero value of the attribute type.
    ///
    /// Unknown keys read as an empty string.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        if let Some(value) = self.values.get(key) {
            return value.clone();
        }
        self.schema.get(key).map_or_else(
            || AttributeType::String.zero_value(),
            |attribute| attribute.effective_default(),
        )
    }

    /// Returns the effective value of `key` unless it is the zero value.
    #[must_use]
    pub fn get_ok(&self, key: &str) -> Option<Value> {
        Some(self.get(key)).filter(|v| !v.is_zero())
    }

    /// Returns the effective string value of `key`.
    ///
    /// A value of the wrong type reads as the empty string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Value::String(s) => s,
            _ => String::new(),
        }
    }

    /// Returns the effective boolean value of `key`.
    ///
    /// A value of the wrong type reads as `false`.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).as_bool().unwrap_or(false)
    }

    /// Returns the effective map value of `key`.
    ///
    /// A value of the wrong type reads as an empty map.
    #[must_use]
    pub fn get_map(&self, key: &str) -> BTreeMap<String, String> {
        match self.get(key) {
            Value::Map(m) => m,
            _ => BTreeMap::new(),
        }
    }

    /// Returns the declared value of `key` without defaults applied.
    #[must_use]
    pub fn declared(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Writes a value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        if !self.schema.contains(key) {
            tracing::warn!(attribute = key, "writing attribute not defined by schema");
        }
        self.values.insert(key.to_string(), value.into());
    }

    /// Checks the declared values against the schema.
    ///
    /// ## Errors
    ///
    /// - [`SchemaError::UnknownAttribute`] for keys the schema lacks
    /// - [`SchemaError::TypeMismatch`] for values of the wrong type
    /// - [`SchemaError::NotAllowed`] for values outside an allowed set
    /// - [`SchemaError::MissingRequired`] for absent or empty required values
    pub fn validate(&self) -> SchemaResult<()> {
        for (key, value) in &self.values {
            let attribute = self
                .schema
                .get(key)
                .ok_or_else(|| SchemaError::UnknownAttribute(key.clone()))?;

            if !attribute.ty.accepts(value) {
                return Err(SchemaError::TypeMismatch {
                    attribute: key.clone(),
                    expected: attribute.ty,
                });
            }

            let restricted = !attribute.allowed_values.is_empty();
            if let Some(s) = value.as_str().filter(|_| restricted) {
                if !attribute.allowed_values.iter().any(|allowed| allowed == s) {
                    return Err(SchemaError::NotAllowed {
                        attribute: key.clone(),
                        value: s.to_string(),
                        allowed: attribute.allowed_values.join(", "),
                    });
                }
            }
        }

        for (key, attribute) in self.schema.iter() {
            if attribute.required && self.values.get(key).map_or(true, Value::is_zero) {
                return Err(SchemaError::MissingRequired(key.clone()));
            }
        }

        Ok(())
    }

    /// Returns the effective value of every schema attribute, with
    /// sensitive values omitted. Suitable for display.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.schema
            .iter()
            .filter(|(_, attribute)| !attribute.sensitive)
            .map(|(key, _)| (key.clone(), self.get(key)))
            .collect()
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: BTreeMap<&str, String> = self
            .values
            .iter()
            .map(|(key, value)| {
                let sensitive = self.schema.get(key).is_some_and(|a| a.sensitive);
                let shown = if sensitive {
                    "(sensitive)".to_string()
                } else {
                    format!("{value:?}")
                };
                (key.as_str(), shown)
            })
            .collect();

        f.debug_struct("ResourceData")
            .field("id", &self.id)
            .field("values", &values)
            .finish_non_exhaustive()
    }
}
