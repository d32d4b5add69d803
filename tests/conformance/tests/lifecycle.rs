//! Lifecycle Conformance Tests
//!
//! Create, read, update, delete, and import against an in-memory server.

use kc_admin_client::IdentityProviderApi;
use kc_idp::IdpError;
use kc_schema::Value;
use std::collections::BTreeMap;

use crate::harness::{TestHarness, TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_REALM};

/// Create assigns the id and the server-side internal id.
#[tokio::test]
async fn test_create_assigns_ids() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut data = harness.full();

    harness.resource.create(&harness.api, &mut data).await?;

    assert_eq!(data.id(), Some("google-workspace"));
    assert!(!data.get_string("internal_id").is_empty());
    assert_eq!(data.get_string("client_secret"), TEST_CLIENT_SECRET);

    let stored = harness
        .api
        .stored(TEST_REALM, "google-workspace")
        .ok_or_else(|| anyhow::anyhow!("provider not stored"))?;
    assert_eq!(stored.config.client_secret, TEST_CLIENT_SECRET);
    Ok(())
}

/// Read picks up changes made on the server.
#[tokio::test]
async fn test_read_detects_drift() -> anyhow::Result<()> {
    let harness = TestHarness::legacy();
    let mut data = harness.minimal();
    harness.resource.create(&harness.api, &mut data).await?;

    let mut remote = harness.api.get_identity_provider(TEST_REALM, "google").await?;
    remote.realm = TEST_REALM.to_string();
    remote.display_name = "Changed in console".to_string();
    remote.config.client_secret = TEST_CLIENT_SECRET.to_string();
    harness.api.update_identity_provider(&remote).await?;

    harness.resource.read(&harness.api, &mut data).await?;

    assert_eq!(data.get_string("display_name"), "Changed in console");
    Ok(())
}

/// Update replaces the server representation and keeps the internal id.
#[tokio::test]
async fn test_update_applies_changes() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut data = harness.minimal();
    harness.resource.create(&harness.api, &mut data).await?;
    let internal_id = data.get_string("internal_id");

    data.set("hosted_domain", "example.com");
    data.set("trust_email", true);
    harness.resource.update(&harness.api, &mut data).await?;

    let stored = harness
        .api
        .stored(TEST_REALM, "google")
        .ok_or_else(|| anyhow::anyhow!("provider not stored"))?;
    assert_eq!(stored.config.hosted_domain, "example.com");
    assert!(stored.trust_email);
    assert_eq!(data.get_string("internal_id"), internal_id);
    Ok(())
}

/// Delete removes the provider and clears the id.
#[tokio::test]
async fn test_delete_removes_provider() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut data = harness.minimal();
    harness.resource.create(&harness.api, &mut data).await?;

    harness.resource.delete(&harness.api, &mut data).await?;

    assert_eq!(data.id(), None);
    assert!(harness.api.is_empty());
    Ok(())
}

/// A provider deleted out of band disappears from state on read.
#[tokio::test]
async fn test_read_after_remote_delete_clears_id() -> anyhow::Result<()> {
    let harness = TestHarness::legacy();
    let mut data = harness.minimal();
    harness.resource.create(&harness.api, &mut data).await?;

    harness.api.delete_identity_provider(TEST_REALM, "google").await?;
    harness.resource.read(&harness.api, &mut data).await?;

    assert_eq!(data.id(), None);
    Ok(())
}

/// Import reads an existing provider by `{realm}/{alias}`.
#[tokio::test]
async fn test_import_existing_provider() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut data = harness.full();
    harness.resource.create(&harness.api, &mut data).await?;

    let imported = harness
        .resource
        .import(&harness.api, &format!("{TEST_REALM}/google-workspace"))
        .await?;

    assert_eq!(imported.id(), Some("google-workspace"));
    assert_eq!(imported.get_string("realm"), TEST_REALM);
    assert_eq!(imported.get_string("client_id"), TEST_CLIENT_ID);
    assert_eq!(imported.get_string("sync_mode"), "FORCE");
    assert!(imported.get_bool("hide_on_login_page"));
    assert_eq!(imported.declared("client_secret"), None);
    Ok(())
}

/// Malformed import ids are rejected before any call.
#[tokio::test]
async fn test_import_rejects_bad_id() {
    let harness = TestHarness::current();
    let result = harness.resource.import(&harness.api, "google").await;
    assert!(matches!(result, Err(IdpError::InvalidImportId(_))));
}

/// Creating the same alias twice fails on the server.
#[tokio::test]
async fn test_duplicate_create_fails() -> anyhow::Result<()> {
    let harness = TestHarness::current();
    let mut first = harness.minimal();
    harness.resource.create(&harness.api, &mut first).await?;

    let mut second = harness.minimal();
    let result = harness.resource.create(&harness.api, &mut second).await;

    assert!(matches!(result, Err(IdpError::Api(ref e)) if e.is_duplicate()));
    assert_eq!(harness.api.len(), 1);
    Ok(())
}

/// An extra config entry shadowing a typed field aborts before sending.
#[tokio::test]
async fn test_merge_conflict_aborts_create() {
    let harness = TestHarness::current();
    let mut data = harness.document(&[(
        "extra_config",
        Value::from(BTreeMap::from([("hostedDomain".to_string(), "evil.com".to_string())])),
    )]);

    let result = harness.resource.create(&harness.api, &mut data).await;

    assert!(matches!(result, Err(IdpError::Merge(_))));
    assert!(harness.api.is_empty());
}

/// Invalid documents never reach the server.
#[tokio::test]
async fn test_invalid_sync_mode_is_rejected() {
    let harness = TestHarness::legacy();
    let mut data = harness.document(&[("sync_mode", Value::from("SOMETIMES"))]);

    let result = harness.resource.create(&harness.api, &mut data).await;

    assert!(matches!(result, Err(IdpError::Schema(_))));
    assert!(harness.api.is_empty());
}
