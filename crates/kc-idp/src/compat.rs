//! Fields relocated between Keycloak releases.
//!
//! Each entry says where a declared attribute lives in the admin API
//! representation before and after a release boundary. Extractors and
//! projectors ask the table instead of comparing versions themselves, so a
//! new boundary is one more entry here.

use kc_core::{is_before, KeycloakVersion};

/// Where a field lives in the admin API representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// Inside the provider `config` map.
    ProviderConfig,
    /// On the top-level identity-provider record.
    TopLevel,
}

/// A declared attribute whose wire location changed at `boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRelocation {
    /// Declared attribute name.
    pub attribute: &'static str,
    /// First release using the new location.
    pub boundary: KeycloakVersion,
    /// Location before `boundary`.
    pub before: FieldLocation,
    /// Wire key before `boundary`.
    pub before_key: &'static str,
    /// Location from `boundary` on.
    pub after: FieldLocation,
    /// Wire key from `boundary` on.
    pub after_key: &'static str,
}

impl FieldRelocation {
    /// Returns the active location on `live`.
    #[must_use]
    pub fn location(&self, live: &KeycloakVersion) -> FieldLocation {
        if is_before(live, &self.boundary) {
            self.before
        } else {
            self.after
        }
    }

    /// Returns the active wire key on `live`.
    #[must_use]
    pub fn wire_key(&self, live: &KeycloakVersion) -> &'static str {
        if is_before(live, &self.boundary) {
            self.before_key
        } else {
            self.after_key
        }
    }

    /// Returns true if the field is read from and written to `location` on `live`.
    #[must_use]
    pub fn is_active_at(&self, location: FieldLocation, live: &KeycloakVersion) -> bool {
        self.location(live) == location
    }
}

/// Login page visibility moved out of the config map in Keycloak 26.
pub const HIDE_ON_LOGIN_PAGE: FieldRelocation = FieldRelocation {
    attribute: "hide_on_login_page",
    boundary: KeycloakVersion::V26,
    before: FieldLocation::ProviderConfig,
    before_key: "hideOnLoginPage",
    after: FieldLocation::TopLevel,
    after_key: "hideOnLogin",
};
