//! Round Trip Conformance Tests
//!
//! A declared document planned for a release and projected back from the
//! resulting representation must reproduce every attribute the server
//! echoes.

use kc_core::KeycloakVersion;
use kc_idp::IdentityProviderVariant;
use kc_schema::Value;

use crate::harness::{TestHarness, SERVER_ASSIGNED, TEST_CLIENT_ID, TEST_REALM, WRITE_ONLY};

fn assert_round_trip(harness: &TestHarness) -> anyhow::Result<()> {
    let declared = harness.full();
    let provider = harness.resource.plan(&declared, &harness.version)?;

    let mut observed = harness.resource.new_data();
    harness
        .resource
        .variant()
        .project(&mut observed, &provider, &harness.version);

    for (name, _) in harness.resource.schema().iter() {
        if WRITE_ONLY.contains(&name.as_str()) || SERVER_ASSIGNED.contains(&name.as_str()) {
            continue;
        }
        assert_eq!(
            observed.get(name),
            declared.get(name),
            "{name} differs after round trip on Keycloak {}",
            harness.version
        );
    }
    assert_eq!(observed.declared("client_secret"), None);
    assert_eq!(observed.id(), Some("google-workspace"));
    Ok(())
}

/// Every echoed attribute survives a round trip on Keycloak 25.
#[test]
fn test_full_document_round_trips_on_legacy_release() -> anyhow::Result<()> {
    assert_round_trip(&TestHarness::legacy())
}

/// Every echoed attribute survives a round trip on Keycloak 26.
#[test]
fn test_full_document_round_trips_on_current_release() -> anyhow::Result<()> {
    assert_round_trip(&TestHarness::current())
}

/// A minimal document picks up the Google defaults.
#[test]
fn test_minimal_document_gets_google_defaults() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let provider = harness.resource.plan(&harness.minimal(), &harness.version)?;

    assert_eq!(provider.realm, TEST_REALM);
    assert_eq!(provider.alias, "google");
    assert_eq!(provider.provider_id, "google");
    assert!(provider.enabled);
    assert!(provider.store_token);
    assert_eq!(provider.first_broker_login_flow_alias, "first broker login");
    assert_eq!(provider.config.client_id, TEST_CLIENT_ID);
    assert_eq!(provider.config.default_scope, "openid profile email");
    assert_eq!(provider.config.sync_mode, "IMPORT");
    assert!(provider.config.use_jwks_url.get());
    assert!(!provider.config.user_ip.get());
    assert!(provider.config.extra_config.is_empty());
    Ok(())
}

/// The declared alias wins over the Google default.
#[test]
fn test_declared_alias_is_kept() -> anyhow::Result<()> {
    let harness = TestHarness::legacy();
    let data = harness.document(&[("alias", Value::from("google-staff"))]);

    let provider = harness.resource.plan(&data, &KeycloakVersion::V25)?;

    assert_eq!(provider.alias, "google-staff");
    Ok(())
}

/// Extra config entries are merged in and read back unchanged.
#[test]
fn test_extra_config_round_trips() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let declared = harness.full();
    let provider = harness.resource.plan(&declared, &harness.version)?;

    assert_eq!(
        provider.config.extra_config.get("prompt").map(String::as_str),
        Some("select_account")
    );
    assert_eq!(provider.config.hosted_domain, "example.com");
    assert_eq!(provider.config.gui_order, "7");
    Ok(())
}
