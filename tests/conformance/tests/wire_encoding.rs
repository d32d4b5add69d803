//! Wire Encoding Conformance Tests
//!
//! The admin API expects string booleans inside `config` and flattens
//! free-form entries next to the typed ones.

use kc_model::{IdentityProvider, KeycloakBoolQuoted};
use serde_json::{json, Value as Json};

use crate::harness::{TestHarness, TEST_CLIENT_SECRET};

/// Every config flag is sent as "true" or "false".
#[test]
fn test_config_flags_are_quoted() -> anyhow::Result<()> {
    let harness = TestHarness::legacy();
    let provider = harness.resource.plan(&harness.full(), &harness.version)?;
    let json = serde_json::to_value(&provider)?;

    assert_eq!(json["config"]["userIp"], json!("true"));
    assert_eq!(json["config"]["offlineAccess"], json!("true"));
    assert_eq!(json["config"]["acceptsPromptNoneForwardFromClient"], json!("true"));
    assert_eq!(json["config"]["useJwksUrl"], json!("true"));
    assert_eq!(json["config"]["disableUserInfo"], json!("true"));
    assert_eq!(json["config"]["hideOnLoginPage"], json!("true"));
    assert_eq!(json["enabled"], json!(true));
    Ok(())
}

/// Top-level keys are camelCase and extra config is flattened.
#[test]
fn test_representation_shape() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let provider = harness.resource.plan(&harness.full(), &harness.version)?;
    let json = serde_json::to_value(&provider)?;

    assert_eq!(json["alias"], json!("google-workspace"));
    assert_eq!(json["providerId"], json!("google"));
    assert_eq!(json["displayName"], json!("Sign in with Google"));
    assert_eq!(json["firstBrokerLoginFlowAlias"], json!("custom first login"));
    assert_eq!(json["hideOnLogin"], json!(true));
    assert_eq!(json["config"]["defaultScope"], json!("openid email"));
    assert_eq!(json["config"]["prompt"], json!("select_account"));
    assert_eq!(json["config"]["syncMode"], json!("FORCE"));
    assert!(json["config"].get("hideOnLoginPage").is_none());
    assert!(json.get("realm").is_none());
    Ok(())
}

/// Server responses are read leniently.
#[test]
fn test_lenient_flag_decoding() -> anyhow::Result<()> {
    let provider: IdentityProvider = serde_json::from_value(json!({
        "alias": "google",
        "providerId": "google",
        "enabled": true,
        "config": {
            "clientId": "client",
            "userIp": "TRUE",
            "offlineAccess": "yes",
            "disableUserInfo": true,
            "hideOnLoginPage": "false",
            "someFutureKey": "value"
        }
    }))?;

    assert!(provider.config.user_ip.get());
    assert!(!provider.config.offline_access.get());
    assert!(provider.config.disable_user_info.get());
    assert_eq!(provider.config.hide_on_login_page, Some(KeycloakBoolQuoted::FALSE));
    assert_eq!(
        provider.config.extra_config.get("someFutureKey").map(String::as_str),
        Some("value")
    );
    Ok(())
}

/// The secret never shows up in debug output or redacted copies.
#[test]
fn test_secret_is_redacted() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let provider = harness.resource.plan(&harness.minimal(), &harness.version)?;

    assert!(!format!("{provider:?}").contains(TEST_CLIENT_SECRET));

    let json = serde_json::to_value(provider.redacted())?;
    assert_ne!(json["config"]["clientSecret"], Json::from(TEST_CLIENT_SECRET));
    Ok(())
}
