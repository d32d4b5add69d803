//! Version Gate Conformance Tests
//!
//! Keycloak 26 moved login page visibility from `config.hideOnLoginPage` to
//! the top-level `hideOnLogin`. These tests pin which location is written
//! and read on each side of the boundary.

use kc_core::{is_before, KeycloakVersion};
use kc_idp::compat::{FieldLocation, HIDE_ON_LOGIN_PAGE};
use kc_idp::IdentityProviderVariant;
use kc_model::{IdentityProvider, KeycloakBoolQuoted};
use kc_schema::Value;

use crate::harness::{TestHarness, TEST_REALM};

fn hidden(harness: &TestHarness) -> kc_schema::ResourceData {
    harness.document(&[("hide_on_login_page", Value::from(true))])
}

/// The gate is strict: the boundary release itself is not "before".
#[test]
fn test_gate_boundary() -> anyhow::Result<()> {
    let boundary = KeycloakVersion::V26;

    assert!(is_before(&"25.99.99".parse()?, &boundary));
    assert!(!is_before(&"26.0.0".parse()?, &boundary));
    assert!(!is_before(&"26.0.0-SNAPSHOT".parse()?, &boundary));
    assert!(!is_before(&"27.1".parse()?, &boundary));
    Ok(())
}

/// Before 26 the flag travels in the config map only.
#[tokio::test]
async fn test_legacy_release_writes_config_flag() -> anyhow::Result<()> {
    let harness = TestHarness::legacy();
    let mut data = hidden(&harness);

    harness.resource.create(&harness.api, &mut data).await?;

    let stored = harness
        .api
        .stored(TEST_REALM, "google")
        .ok_or_else(|| anyhow::anyhow!("provider not stored"))?;
    assert_eq!(stored.config.hide_on_login_page, Some(KeycloakBoolQuoted::TRUE));
    assert_eq!(stored.hide_on_login, None);
    assert!(data.get_bool("hide_on_login_page"));
    Ok(())
}

/// From 26 on the flag travels at the top level only.
#[tokio::test]
async fn test_current_release_writes_top_level_flag() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut data = hidden(&harness);

    harness.resource.create(&harness.api, &mut data).await?;

    let stored = harness
        .api
        .stored(TEST_REALM, "google")
        .ok_or_else(|| anyhow::anyhow!("provider not stored"))?;
    assert_eq!(stored.hide_on_login, Some(true));
    assert_eq!(stored.config.hide_on_login_page, None);
    assert!(data.get_bool("hide_on_login_page"));
    Ok(())
}

/// On 26 a stale config flag is not projected.
#[test]
fn test_current_release_ignores_stale_config_flag() {
    let harness = TestHarness::current();
    let mut provider = IdentityProvider {
        alias: "google".to_string(),
        provider_id: "google".to_string(),
        ..Default::default()
    };
    provider.config.hide_on_login_page = Some(KeycloakBoolQuoted::TRUE);

    let mut observed = harness.resource.new_data();
    harness
        .resource
        .variant()
        .project(&mut observed, &provider, &harness.version);

    assert!(!observed.get_bool("hide_on_login_page"));
}

/// Before 26 a top-level flag is not projected.
#[test]
fn test_legacy_release_ignores_top_level_flag() {
    let harness = TestHarness::legacy();
    let provider = IdentityProvider {
        alias: "google".to_string(),
        hide_on_login: Some(true),
        ..Default::default()
    };

    let mut observed = harness.resource.new_data();
    harness
        .resource
        .variant()
        .project(&mut observed, &provider, &harness.version);

    assert!(!observed.get_bool("hide_on_login_page"));
}

/// The relocation table agrees with what the extractor emits.
#[test]
fn test_relocation_table_matches_extraction() -> anyhow::Result<()> {
    for harness in [TestHarness::legacy(), TestHarness::current()] {
        let provider = harness.resource.plan(&hidden(&harness), &harness.version)?;
        let json = serde_json::to_value(&provider)?;
        let key = HIDE_ON_LOGIN_PAGE.wire_key(&harness.version);

        let emitted = match HIDE_ON_LOGIN_PAGE.location(&harness.version) {
            FieldLocation::ProviderConfig => &json["config"][key],
            FieldLocation::TopLevel => &json[key],
        };
        assert!(!emitted.is_null(), "{key} missing on Keycloak {}", harness.version);
    }
    Ok(())
}
