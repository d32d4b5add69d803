//! Test harness for identity-provider conformance testing.
//!
//! Pairs an in-memory admin API pinned to one Keycloak release with the
//! Google identity provider resource.

use std::collections::BTreeMap;

use kc_admin_client::InMemoryAdminApi;
use kc_core::KeycloakVersion;
use kc_idp::{GoogleIdentityProvider, IdentityProviderResource};
use kc_schema::{ResourceData, Value};

/// Realm used by every test.
pub const TEST_REALM: &str = "conformance";

/// Client id declared by the fixtures.
pub const TEST_CLIENT_ID: &str = "1234567890-abc.apps.googleusercontent.com";

/// Client secret declared by the fixtures.
pub const TEST_CLIENT_SECRET: &str = "GOCSPX-conformance-secret";

/// A server of one release plus the resource under test.
pub struct TestHarness {
    /// In-memory admin API.
    pub api: InMemoryAdminApi,
    /// Google identity provider resource.
    pub resource: IdentityProviderResource<GoogleIdentityProvider>,
    /// Release the server reports.
    pub version: KeycloakVersion,
}

impl TestHarness {
    /// Creates a harness whose server reports `version`.
    pub fn new(version: KeycloakVersion) -> Self {
        Self {
            api: InMemoryAdminApi::new(version),
            resource: IdentityProviderResource::new(GoogleIdentityProvider::new()),
            version,
        }
    }

    /// Harness for the last release with `config.hideOnLoginPage`.
    pub fn legacy() -> Self {
        Self::new(KeycloakVersion::new(25, 0, 6))
    }

    /// Harness for the first release with top-level `hideOnLogin`.
    pub fn current() -> Self {
        Self::new(KeycloakVersion::new(26, 0, 0))
    }

    /// Minimal valid document: only required attributes.
    pub fn minimal(&self) -> ResourceData {
        self.document(&[])
    }

    /// Document with every user-settable attribute declared away from its
    /// default.
    pub fn full(&self) -> ResourceData {
        self.document(&[
            ("alias", Value::from("google-workspace")),
            ("display_name", Value::from("Sign in with Google")),
            ("enabled", Value::from(true)),
            ("store_token", Value::from(false)),
            ("add_read_token_role_on_create", Value::from(true)),
            ("authenticate_by_default", Value::from(true)),
            ("link_only", Value::from(true)),
            ("trust_email", Value::from(true)),
            ("first_broker_login_flow_alias", Value::from("custom first login")),
            ("post_broker_login_flow_alias", Value::from("custom post login")),
            ("sync_mode", Value::from("FORCE")),
            ("gui_order", Value::from("7")),
            ("hosted_domain", Value::from("example.com")),
            ("use_user_ip_param", Value::from(true)),
            ("request_refresh_token", Value::from(true)),
            ("default_scopes", Value::from("openid email")),
            ("accepts_prompt_none_forward_from_client", Value::from(true)),
            ("disable_user_info", Value::from(true)),
            ("hide_on_login_page", Value::from(true)),
            (
                "extra_config",
                Value::from(BTreeMap::from([
                    ("prompt".to_string(), "select_account".to_string()),
                    ("loginHint".to_string(), "true".to_string()),
                ])),
            ),
        ])
    }

    /// Required attributes plus `extra`.
    pub fn document(&self, extra: &[(&str, Value)]) -> ResourceData {
        let mut values: BTreeMap<String, Value> = BTreeMap::from([
            ("realm".to_string(), Value::from(TEST_REALM)),
            ("client_id".to_string(), Value::from(TEST_CLIENT_ID)),
            ("client_secret".to_string(), Value::from(TEST_CLIENT_SECRET)),
        ]);
        for (key, value) in extra {
            values.insert((*key).to_string(), value.clone());
        }
        self.resource.data_from_values(values)
    }
}

/// Attributes the server never echoes back.
pub const WRITE_ONLY: &[&str] = &["client_secret"];

/// Attributes the server assigns.
pub const SERVER_ASSIGNED: &[&str] = &["internal_id"];
