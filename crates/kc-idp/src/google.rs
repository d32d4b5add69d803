//! Google OIDC identity provider.

use kc_core::config::ReconcileConfig;
use kc_core::KeycloakVersion;
use kc_model::{IdentityProvider, IdentityProviderConfig, KeycloakBoolQuoted};
use kc_schema::{Attribute, AttributeSet, ResourceData};

use crate::base::{extract_identity_provider, project_identity_provider};
use crate::compat::{FieldLocation, HIDE_ON_LOGIN_PAGE};
use crate::error::IdpResult;
use crate::merge::merge_defaults;
use crate::resource::IdentityProviderVariant;

/// Resource type name.
pub const RESOURCE_TYPE: &str = "keycloak_oidc_google_identity_provider";

/// Canonical provider id and alias.
pub const GOOGLE_PROVIDER_ID: &str = "google";

/// Scopes requested when none are declared.
pub const DEFAULT_SCOPES: &str = "openid profile email";

/// Returns the Google attribute overlay.
///
/// `defaults` supplies the provider id and scope defaults; use
/// [`ReconcileConfig::default`] for the stock values.
#[must_use]
pub fn google_schema(defaults: &ReconcileConfig) -> AttributeSet {
    AttributeSet::new()
        .with(
            "alias",
            Attribute::string()
                .computed()
                .description("The alias uniquely identifies an identity provider and it is also used to build the redirect uri. In case of google this is computed and always google"),
        )
        .with(
            "display_name",
            Attribute::string()
                .computed()
                .description("The human-friendly name of the identity provider, used in the log in form."),
        )
        .with(
            "provider_id",
            Attribute::string()
                .default_value(defaults.default_provider_id.clone())
                .description("provider id, is always google, unless you have a extended custom implementation"),
        )
        .with("client_id", Attribute::string().required().description("Client ID."))
        .with(
            "client_secret",
            Attribute::string().required().sensitive().description("Client Secret."),
        )
        .with(
            "hosted_domain",
            Attribute::string().description("Set 'hd' query parameter when logging in with Google. Google will list accounts only for this domain. Keycloak validates that the returned identity token has a claim for this domain. When '*' is entered, any hosted account can be used."),
        )
        .with(
            "use_user_ip_param",
            Attribute::bool()
                .default_value(false)
                .description("Set 'userIp' query parameter when invoking on Google's User Info service. This will use the user's ip address. Useful if Google is throttling access to the User Info service."),
        )
        .with(
            "request_refresh_token",
            Attribute::bool()
                .default_value(false)
                .description("Set 'access_type' query parameter to 'offline' when redirecting to google authorization endpoint, to get a refresh token back."),
        )
        .with(
            "default_scopes",
            Attribute::string()
                .default_value(defaults.default_scopes.clone())
                .description("The scopes to be sent when asking for authorization."),
        )
        .with(
            "accepts_prompt_none_forward_from_client",
            Attribute::bool()
                .default_value(false)
                .description("In case that client sends a request with prompt=none and user is not yet authenticated, the request is forwarded to this identity provider instead of failing."),
        )
        .with(
            "disable_user_info",
            Attribute::bool()
                .default_value(false)
                .description("Disable usage of User Info service to obtain additional user information?"),
        )
        .with(
            "hide_on_login_page",
            Attribute::bool().default_value(false).description("Hide On Login Page."),
        )
}

/// Builds the Google admin API representation from `data`.
///
/// ## Errors
///
/// Returns [`IdpError::Merge`](crate::IdpError::Merge) if the generic
/// defaults cannot be merged into the Google config.
pub fn extract_google_identity_provider(
    data: &ResourceData,
    keycloak_version: &KeycloakVersion,
) -> IdpResult<IdentityProvider> {
    let (mut provider, defaults) = extract_identity_provider(data, keycloak_version);
    provider.provider_id = data.get_string("provider_id");
    provider.alias = data
        .get_ok("alias")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| GOOGLE_PROVIDER_ID.to_string());

    let legacy_hide = HIDE_ON_LOGIN_PAGE.is_active_at(FieldLocation::ProviderConfig, keycloak_version);

    let mut config = IdentityProviderConfig {
        client_id: data.get_string("client_id"),
        client_secret: data.get_string("client_secret"),
        hosted_domain: data.get_string("hosted_domain"),
        user_ip: quoted(data, "use_user_ip_param"),
        offline_access: quoted(data, "request_refresh_token"),
        default_scope: data.get_string("default_scopes"),
        accepts_prompt_none_forward_from_client: quoted(data, "accepts_prompt_none_forward_from_client"),
        use_jwks_url: KeycloakBoolQuoted::TRUE,
        disable_user_info: quoted(data, "disable_user_info"),
        hide_on_login_page: legacy_hide.then(|| quoted(data, HIDE_ON_LOGIN_PAGE.attribute)),
        ..Default::default()
    };

    merge_defaults(&mut config, &defaults)?;
    provider.config = config;

    tracing::debug!(
        realm = %provider.realm,
        alias = %provider.alias,
        keycloak_version = %keycloak_version,
        "extracted google identity provider"
    );

    Ok(provider)
}

/// Writes the Google fields of `provider` into `data`.
///
/// `client_secret` is write-only and never read back. The config-map
/// `hideOnLoginPage` flag is only read on servers that still keep it there.
pub fn project_google_identity_provider(
    data: &mut ResourceData,
    provider: &IdentityProvider,
    keycloak_version: &KeycloakVersion,
) {
    project_identity_provider(data, provider, keycloak_version);

    let config = &provider.config;
    data.set("provider_id", provider.provider_id.clone());
    data.set("client_id", config.client_id.clone());
    data.set("hosted_domain", config.hosted_domain.clone());
    data.set("use_user_ip_param", config.user_ip.get());
    data.set("request_refresh_token", config.offline_access.get());
    data.set("default_scopes", config.default_scope.clone());
    data.set(
        "accepts_prompt_none_forward_from_client",
        config.accepts_prompt_none_forward_from_client.get(),
    );
    data.set("disable_user_info", config.disable_user_info.get());

    if HIDE_ON_LOGIN_PAGE.is_active_at(FieldLocation::ProviderConfig, keycloak_version) {
        data.set(
            HIDE_ON_LOGIN_PAGE.attribute,
            config.hide_on_login_page.unwrap_or_default().get(),
        );
    }
}

fn quoted(data: &ResourceData, key: &str) -> KeycloakBoolQuoted {
    data.get_bool(key).into()
}

/// The Google identity-provider variant.
#[derive(Debug, Clone, Default)]
pub struct GoogleIdentityProvider {
    defaults: ReconcileConfig,
}

impl GoogleIdentityProvider {
    /// Creates the variant with the stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the variant with configured defaults.
    #[must_use]
    pub fn with_defaults(defaults: ReconcileConfig) -> Self {
        Self { defaults }
    }
}

impl IdentityProviderVariant for GoogleIdentityProvider {
    fn resource_type(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema_overlay(&self) -> AttributeSet {
        google_schema(&self.defaults)
    }

    fn extract(&self, data: &ResourceData, keycloak_version: &KeycloakVersion) -> IdpResult<IdentityProvider> {
        extract_google_identity_provider(data, keycloak_version)
    }

    fn project(&self, data: &mut ResourceData, provider: &IdentityProvider, keycloak_version: &KeycloakVersion) {
        project_google_identity_provider(data, provider, keycloak_version);
    }
}
