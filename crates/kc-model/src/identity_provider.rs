//! Identity provider representation.
//!
//! An identity provider brokers authentication to an external system
//! (Google, another OIDC server, SAML IdP). The admin API splits it into a
//! generic top-level record and a provider-specific `config` map whose keys
//! are fixed wire identifiers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bool_quoted::KeycloakBoolQuoted;

/// A Keycloak identity provider as exchanged with the admin API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)] // mirrors the admin API representation
pub struct IdentityProvider {
    /// Realm the provider belongs to. Part of the request path, not the body.
    #[serde(skip)]
    pub realm: String,
    /// Unique alias within the realm; also forms the broker redirect URI.
    pub alias: String,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub internal_id: String,
    /// Provider implementation id (e.g. `google`, `oidc`).
    pub provider_id: String,
    /// Name shown on the login page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// Whether the provider is enabled.
    pub enabled: bool,
    /// Whether tokens are stored after authenticating users.
    pub store_token: bool,
    /// Whether new users can read stored tokens.
    pub add_read_token_role_on_create: bool,
    /// Whether this provider is used by default for authentication.
    pub authenticate_by_default: bool,
    /// Whether the provider may only be used to link accounts.
    pub link_only: bool,
    /// Whether email addresses from this provider are trusted.
    pub trust_email: bool,
    /// Flow run after first login with this provider.
    pub first_broker_login_flow_alias: String,
    /// Flow run after each login with this provider.
    pub post_broker_login_flow_alias: String,
    /// Login page visibility. Only understood by Keycloak 26 and later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_on_login: Option<bool>,
    /// Provider-specific configuration.
    pub config: IdentityProviderConfig,
}

/// The `config` map of an identity provider.
///
/// Known keys are typed fields; anything else is kept in
/// [`extra_config`](Self::extra_config) and flattened into the same JSON
/// object. Every flag is a [`KeycloakBoolQuoted`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityProviderConfig {
    /// OAuth client id registered with the external provider.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    /// OAuth client secret. Write-only: never logged, never read back.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_secret: String,
    /// Google `hd` parameter restricting accounts to one domain.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hosted_domain: String,
    /// Pass the user's IP to Google's user info service.
    pub user_ip: KeycloakBoolQuoted,
    /// Request `access_type=offline` to obtain a refresh token.
    pub offline_access: KeycloakBoolQuoted,
    /// Scopes sent in the authorization request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_scope: String,
    /// Forward `prompt=none` requests to this provider.
    pub accepts_prompt_none_forward_from_client: KeycloakBoolQuoted,
    /// Validate tokens using the provider's JWKS URL.
    pub use_jwks_url: KeycloakBoolQuoted,
    /// Skip the user info endpoint.
    pub disable_user_info: KeycloakBoolQuoted,
    /// Legacy login page visibility flag, read by Keycloak before 26.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_on_login_page: Option<KeycloakBoolQuoted>,
    /// Account import strategy (`IMPORT`, `LEGACY`, `FORCE`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sync_mode: String,
    /// Ordering of the provider on the login page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gui_order: String,
    /// Config entries without a typed field.
    #[serde(flatten)]
    pub extra_config: BTreeMap<String, String>,
}

impl IdentityProviderConfig {
    /// Wire keys owned by typed fields.
    pub const TYPED_KEYS: &'static [&'static str] = &[
        "clientId",
        "clientSecret",
        "hostedDomain",
        "userIp",
        "offlineAccess",
        "defaultScope",
        "acceptsPromptNoneForwardFromClient",
        "useJwksUrl",
        "disableUserInfo",
        "hideOnLoginPage",
        "syncMode",
        "guiOrder",
    ];

    /// Returns true if `key` is the wire name of a typed field.
    #[must_use]
    pub fn is_typed_key(key: &str) -> bool {
        Self::TYPED_KEYS.contains(&key)
    }

    /// Returns a copy with the client secret masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.client_secret.is_empty() {
            copy.client_secret = REDACTED.to_string();
        }
        copy
    }
}

const REDACTED: &str = "**********";

impl fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.client_secret.is_empty() { "" } else { REDACTED };
        f.debug_struct("IdentityProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &secret)
            .field("hosted_domain", &self.hosted_domain)
            .field("user_ip", &self.user_ip)
            .field("offline_access", &self.offline_access)
            .field("default_scope", &self.default_scope)
            .field(
                "accepts_prompt_none_forward_from_client",
                &self.accepts_prompt_none_forward_from_client,
            )
            .field("use_jwks_url", &self.use_jwks_url)
            .field("disable_user_info", &self.disable_user_info)
            .field("hide_on_login_page", &self.hide_on_login_page)
            .field("sync_mode", &self.sync_mode)
            .field("gui_order", &self.gui_order)
            .field("extra_config", &self.extra_config)
            .finish()
    }
}

impl IdentityProvider {
    /// Returns a copy with the client secret masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            config: self.config.redacted(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn google() -> IdentityProvider {
        IdentityProvider {
            realm: "corp".to_string(),
            alias: "google".to_string(),
            provider_id: "google".to_string(),
            enabled: true,
            config: IdentityProviderConfig {
                client_id: "client".to_string(),
                client_secret: "s3cret".to_string(),
                user_ip: KeycloakBoolQuoted::TRUE,
                default_scope: "openid".to_string(),
                extra_config: BTreeMap::from([("loginHint".to_string(), "true".to_string())]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn config_flags_are_quoted_on_the_wire() {
        let value = serde_json::to_value(google()).unwrap();
        let config = &value["config"];

        assert_eq!(config["userIp"], json!("true"));
        assert_eq!(config["offlineAccess"], json!("false"));
        assert_eq!(config["acceptsPromptNoneForwardFromClient"], json!("false"));
        assert_eq!(config["loginHint"], json!("true"));
        assert!(config.get("hideOnLoginPage").is_none());
        assert!(value.get("realm").is_none());
        assert!(value.get("hideOnLogin").is_none());
    }

    #[test]
    fn unknown_config_keys_land_in_extra_config() {
        let raw = json!({
            "alias": "google",
            "providerId": "google",
            "enabled": true,
            "config": {
                "clientId": "abc",
                "disableUserInfo": "true",
                "prompt": "consent"
            }
        });

        let idp: IdentityProvider = serde_json::from_value(raw).unwrap();
        assert_eq!(idp.config.client_id, "abc");
        assert!(idp.config.disable_user_info.get());
        assert_eq!(idp.config.extra_config.get("prompt").map(String::as_str), Some("consent"));
        assert!(!idp.config.extra_config.contains_key("clientId"));
    }

    #[test]
    fn debug_never_prints_the_secret() {
        let rendered = format!("{:?}", google());
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("**********"));
    }

    #[test]
    fn redacted_masks_secret_only() {
        let redacted = google().redacted();
        assert_eq!(redacted.config.client_secret, "**********");
        assert_eq!(redacted.config.client_id, "client");

        let value: Value = serde_json::to_value(&redacted).unwrap();
        assert_eq!(value["config"]["clientSecret"], json!("**********"));
    }

    #[test]
    fn typed_keys_cover_wire_names() {
        assert!(IdentityProviderConfig::is_typed_key("hideOnLoginPage"));
        assert!(!IdentityProviderConfig::is_typed_key("prompt"));
    }
}
