//! Quoted booleans.
//!
//! Keycloak stores identity-provider config as a `Map<String, String>`, so a
//! flag such as `userIp` travels as the string `"true"` rather than a JSON
//! boolean. [`KeycloakBoolQuoted`] always serializes to the quoted form and
//! accepts either form when reading.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A boolean serialized as the string `"true"` or `"false"`.
///
/// The default (and zero value) is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeycloakBoolQuoted(pub bool);

impl KeycloakBoolQuoted {
    /// Quoted `true`.
    pub const TRUE: Self = Self(true);
    /// Quoted `false`.
    pub const FALSE: Self = Self(false);

    /// Returns the wrapped boolean.
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }

    /// Returns true when this holds the zero value (`false`).
    #[must_use]
    pub const fn is_zero(self) -> bool {
        !self.0
    }

    /// Returns the wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

impl From<bool> for KeycloakBoolQuoted {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<KeycloakBoolQuoted> for bool {
    fn from(value: KeycloakBoolQuoted) -> Self {
        value.0
    }
}

impl fmt::Display for KeycloakBoolQuoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KeycloakBoolQuoted {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeycloakBoolQuoted {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuotedBoolVisitor)
    }
}

/// Reads `"true"`, `"false"`, or a JSON boolean.
///
/// Anything else (empty strings, `null`, numbers) decodes to `false` so a
/// malformed value from the server never aborts a refresh.
struct QuotedBoolVisitor;

impl<'de> Visitor<'de> for QuotedBoolVisitor {
    type Value = KeycloakBoolQuoted;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or a quoted boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted(v.trim().eq_ignore_ascii_case("true")))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted::FALSE)
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted::FALSE)
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted::FALSE)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted::FALSE)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(KeycloakBoolQuoted::FALSE)
    }
}
