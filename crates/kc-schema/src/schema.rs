//! Attribute descriptors and attribute sets.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

use crate::data::Value;

/// Semantic type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// UTF-8 string.
    String,
    /// Boolean flag.
    Bool,
    /// String → string map.
    Map,
}

impl AttributeType {
    /// Returns the zero value of this type.
    #[must_use]
    pub fn zero_value(self) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Bool => Value::Bool(false),
            Self::Map => Value::Map(BTreeMap::new()),
        }
    }

    /// Returns true if `value` has this type.
    #[must_use]
    pub const fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Bool, Value::Bool(_))
                | (Self::Map, Value::Map(_))
        )
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Map => "map",
        })
    }
}

/// Descriptor for a single resource attribute.
///
/// Attributes start out optional; use the builder methods to tighten them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Attribute {
    /// Semantic type.
    #[serde(rename = "type")]
    pub ty: AttributeType,
    /// Must be declared.
    pub required: bool,
    /// May be declared.
    pub optional: bool,
    /// May be filled in from observed state.
    pub computed: bool,
    /// Never echoed in logs, plans, or `Debug` output.
    pub sensitive: bool,
    /// Changing the value replaces the remote object.
    pub force_new: bool,
    /// Value used when the attribute is not declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Closed set of accepted string values; empty means unrestricted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
    /// Human description.
    pub description: String,
}

impl Attribute {
    /// Creates an optional attribute of the given type.
    #[must_use]
    pub fn new(ty: AttributeType) -> Self {
        Self {
            ty,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            force_new: false,
            default: None,
            allowed_values: Vec::new(),
            description: String::new(),
        }
    }

    /// Optional string attribute.
    #[must_use]
    pub fn string() -> Self {
        Self::new(AttributeType::String)
    }

    /// Optional boolean attribute.
    #[must_use]
    pub fn bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    /// Optional string map attribute.
    #[must_use]
    pub fn map() -> Self {
        Self::new(AttributeType::Map)
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Marks the attribute as computed.
    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Marks the attribute as sensitive.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Marks the attribute as force-new.
    #[must_use]
    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restricts the attribute to a closed set of string values.
    #[must_use]
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.allowed_values = values.iter().map(|v| (*v).to_string()).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the value used when nothing is declared.
    #[must_use]
    pub fn effective_default(&self) -> Value {
        self.default.clone().unwrap_or_else(|| self.ty.zero_value())
    }

    /// Returns true if the flag combination is coherent.
    ///
    /// A required attribute cannot also be computed, and a default must
    /// match the attribute type.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let flags_ok = !(self.required && self.computed) && !(self.required && self.optional);
        let default_ok = self.default.as_ref().map_or(true, |d| self.ty.accepts(d));
        flags_ok && default_ok
    }
}

/// An ordered map from attribute name to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: BTreeMap<String, Attribute>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any previous descriptor with that name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.insert(name, attribute);
        self
    }

    /// Inserts an attribute, returning the descriptor it replaced.
    pub fn insert(&mut self, name: impl Into<String>, attribute: Attribute) -> Option<Attribute> {
        let name = name.into();
        debug_assert!(
            attribute.is_consistent(),
            "attribute '{name}' has contradictory flags or a mistyped default"
        );
        self.attributes.insert(name, attribute)
    }

    /// Overlays `overlay` on `base`.
    ///
    /// The result holds the union of both key spaces. Where both define an
    /// attribute the overlay's descriptor replaces the base descriptor
    /// wholesale, flags included.
    #[must_use]
    pub fn merge(base: &Self, overlay: &Self) -> Self {
        let mut merged = base.clone();
        for (name, attribute) in &overlay.attributes {
            merged.attributes.insert(name.clone(), attribute.clone());
        }
        merged
    }

    /// Returns the descriptor for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Returns true if the set defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the set has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Attribute> {
        self.attributes.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a String, &'a Attribute);
    type IntoIter = btree_map::Iter<'a, String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
