//! Attributes and mapping shared by every identity provider.
//!
//! Variants compose with this module: they overlay their attribute set on
//! [`identity_provider_schema`], call [`extract_identity_provider`] before
//! building their own config, and call [`project_identity_provider`] before
//! projecting their own fields.

use kc_core::KeycloakVersion;
use kc_model::{IdentityProvider, IdentityProviderConfig};
use kc_schema::{Attribute, AttributeSet, ResourceData};

use crate::compat::{FieldLocation, HIDE_ON_LOGIN_PAGE};

/// Accepted `sync_mode` values.
pub const SYNC_MODES: &[&str] = &["IMPORT", "LEGACY", "FORCE"];

/// Returns the generic identity-provider attribute set.
#[must_use]
pub fn identity_provider_schema() -> AttributeSet {
    AttributeSet::new()
        .with(
            "realm",
            Attribute::string()
                .required()
                .force_new()
                .description("Realm name"),
        )
        .with(
            "alias",
            Attribute::string()
                .required()
                .force_new()
                .description("The alias uniquely identifies an identity provider and it is also used to build the redirect uri."),
        )
        .with(
            "display_name",
            Attribute::string().description("Friendly name for Identity Providers."),
        )
        .with(
            "internal_id",
            Attribute::string()
                .computed()
                .description("Internal Identity Provider Id"),
        )
        .with(
            "enabled",
            Attribute::bool()
                .default_value(true)
                .description("Enable/disable this identity provider."),
        )
        .with(
            "store_token",
            Attribute::bool()
                .default_value(true)
                .description("Enable/disable if tokens must be stored after authenticating users."),
        )
        .with(
            "add_read_token_role_on_create",
            Attribute::bool()
                .default_value(false)
                .description("Enable/disable if new users can read any stored tokens. This assigns the broker.read-token role."),
        )
        .with(
            "authenticate_by_default",
            Attribute::bool()
                .default_value(false)
                .description("Enable/disable authenticate users by default."),
        )
        .with(
            "link_only",
            Attribute::bool()
                .default_value(false)
                .description("If true, users cannot log in through this provider. They can only link to this provider."),
        )
        .with(
            "trust_email",
            Attribute::bool()
                .default_value(false)
                .description("If enabled then email provided by this provider is not verified even if verification is enabled for the realm."),
        )
        .with(
            "hide_on_login_page",
            Attribute::bool()
                .default_value(false)
                .description("If hidden, then login with this provider is possible only if requested explicitly."),
        )
        .with(
            "first_broker_login_flow_alias",
            Attribute::string()
                .default_value("first broker login")
                .description("Alias of authentication flow, which is triggered after first login with this identity provider."),
        )
        .with(
            "post_broker_login_flow_alias",
            Attribute::string()
                .default_value("")
                .description("Alias of authentication flow, which is triggered after each login with this identity provider."),
        )
        .with(
            "sync_mode",
            Attribute::string()
                .default_value("IMPORT")
                .one_of(SYNC_MODES)
                .description("Sync Mode"),
        )
        .with(
            "gui_order",
            Attribute::string().description("GUI Order"),
        )
        .with(
            "extra_config",
            Attribute::map().description("Additional provider config entries without a dedicated attribute."),
        )
}

/// Builds the generic record and the default config from `data`.
///
/// The default config carries values shared by every provider type; the
/// variant merges it into its own config with
/// [`merge_defaults`](crate::merge::merge_defaults).
#[must_use]
pub fn extract_identity_provider(
    data: &ResourceData,
    keycloak_version: &KeycloakVersion,
) -> (IdentityProvider, IdentityProviderConfig) {
    let mut defaults = IdentityProviderConfig {
        sync_mode: data.get_string("sync_mode"),
        gui_order: data.get_string("gui_order"),
        extra_config: data.get_map("extra_config"),
        ..Default::default()
    };

    let mut provider = IdentityProvider {
        realm: data.get_string("realm"),
        alias: data.get_string("alias"),
        internal_id: data.get_string("internal_id"),
        display_name: data.get_string("display_name"),
        enabled: data.get_bool("enabled"),
        store_token: data.get_bool("store_token"),
        add_read_token_role_on_create: data.get_bool("add_read_token_role_on_create"),
        authenticate_by_default: data.get_bool("authenticate_by_default"),
        link_only: data.get_bool("link_only"),
        trust_email: data.get_bool("trust_email"),
        first_broker_login_flow_alias: data.get_string("first_broker_login_flow_alias"),
        post_broker_login_flow_alias: data.get_string("post_broker_login_flow_alias"),
        ..Default::default()
    };

    let hide = data.get_bool(HIDE_ON_LOGIN_PAGE.attribute);
    match HIDE_ON_LOGIN_PAGE.location(keycloak_version) {
        FieldLocation::ProviderConfig => defaults.hide_on_login_page = Some(hide.into()),
        FieldLocation::TopLevel => provider.hide_on_login = Some(hide),
    }

    (provider, defaults)
}

/// Writes the generic fields of `provider` into `data`.
///
/// Sets the resource id to the alias.
pub fn project_identity_provider(
    data: &mut ResourceData,
    provider: &IdentityProvider,
    keycloak_version: &KeycloakVersion,
) {
    data.set_id(provider.alias.clone());

    // Realm is part of the request path; representations read from a
    // file don't carry it.
    if !provider.realm.is_empty() {
        data.set("realm", provider.realm.clone());
    }
    data.set("alias", provider.alias.clone());
    data.set("internal_id", provider.internal_id.clone());
    data.set("display_name", provider.display_name.clone());
    data.set("enabled", provider.enabled);
    data.set("store_token", provider.store_token);
    data.set("add_read_token_role_on_create", provider.add_read_token_role_on_create);
    data.set("authenticate_by_default", provider.authenticate_by_default);
    data.set("link_only", provider.link_only);
    data.set("trust_email", provider.trust_email);
    data.set("first_broker_login_flow_alias", provider.first_broker_login_flow_alias.clone());
    data.set("post_broker_login_flow_alias", provider.post_broker_login_flow_alias.clone());
    data.set("sync_mode", provider.config.sync_mode.clone());
    data.set("gui_order", provider.config.gui_order.clone());
    data.set("extra_config", provider.config.extra_config.clone());

    if HIDE_ON_LOGIN_PAGE.is_active_at(FieldLocation::TopLevel, keycloak_version) {
        data.set(HIDE_ON_LOGIN_PAGE.attribute, provider.hide_on_login.unwrap_or(false));
    }
}
