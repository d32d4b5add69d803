//! Keycloak server release versions.
//!
//! The admin API contract changes between releases: fields are renamed,
//! relocated, or removed. A [`KeycloakVersion`] is the live server's reported
//! release and is only ever compared against fixed boundaries such as
//! [`KeycloakVersion::V26`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A Keycloak release version (`major.minor.patch`).
///
/// Ordering is numeric and total. Build qualifiers such as `-SNAPSHOT` or
/// `.redhat-00001` are accepted when parsing and ignored for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeycloakVersion {
    /// Major release number.
    pub major: u32,
    /// Minor release number.
    pub minor: u32,
    /// Patch release number.
    pub patch: u32,
}

impl KeycloakVersion {
    /// Keycloak 20.
    pub const V20: Self = Self::new(20, 0, 0);
    /// Keycloak 21.
    pub const V21: Self = Self::new(21, 0, 0);
    /// Keycloak 22.
    pub const V22: Self = Self::new(22, 0, 0);
    /// Keycloak 23.
    pub const V23: Self = Self::new(23, 0, 0);
    /// Keycloak 24.
    pub const V24: Self = Self::new(24, 0, 0);
    /// Keycloak 25.
    pub const V25: Self = Self::new(25, 0, 0);
    /// Keycloak 26. `hideOnLoginPage` moved out of the identity-provider
    /// config map into the top-level `hideOnLogin` attribute.
    pub const V26: Self = Self::new(26, 0, 0);

    /// Creates a version from its numeric components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns true if this version is strictly older than `threshold`.
    #[must_use]
    pub fn is_before(&self, threshold: &Self) -> bool {
        self < threshold
    }
}

/// Returns true if `live` is strictly older than `threshold`.
///
/// This is the only gate consulted when deciding whether a legacy field is
/// still read from, or written to, its pre-relocation location.
#[must_use]
pub fn is_before(live: &KeycloakVersion, threshold: &KeycloakVersion) -> bool {
    live.is_before(threshold)
}

impl fmt::Display for KeycloakVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for KeycloakVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let core = trimmed
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut parts = [0u32; 3];
        let mut parsed = 0;
        for segment in core.split('.') {
            if parsed == parts.len() {
                break;
            }
            match segment.parse::<u32>() {
                Ok(n) => {
                    parts[parsed] = n;
                    parsed += 1;
                }
                // First non-numeric segment starts a qualifier (e.g. "redhat").
                Err(_) if parsed > 0 => break,
                Err(_) => return Err(Error::Version(s.to_string())),
            }
        }

        if parsed == 0 {
            return Err(Error::Version(s.to_string()));
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for KeycloakVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeycloakVersion> for String {
    fn from(value: KeycloakVersion) -> Self {
        value.to_string()
    }
}
