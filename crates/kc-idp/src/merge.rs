//! Non-destructive merge of generic defaults into a variant config.
//!
//! The variant config is built from declared values first. Defaults computed
//! by the generic extractor only fill fields the variant left at their zero
//! value; nothing the variant populated is overwritten.
//!
//! A quoted boolean set to `false` is indistinguishable from "not set" here:
//! a default of `true` wins over a declared `false`.

use kc_model::{IdentityProviderConfig, KeycloakBoolQuoted};

use crate::error::MergeError;

/// Fills zero-valued fields of `config` from `defaults`.
///
/// Extra-config entries present only in `defaults` are added; entries
/// already in `config` are kept. No field absent from both is introduced.
///
/// ## Errors
///
/// Returns [`MergeError::IncompatibleField`] if either side carries an
/// extra-config entry under the wire key of a typed field. `config` is left
/// untouched in that case.
pub fn merge_defaults(
    config: &mut IdentityProviderConfig,
    defaults: &IdentityProviderConfig,
) -> Result<(), MergeError> {
    if let Some(key) = config
        .extra_config
        .keys()
        .chain(defaults.extra_config.keys())
        .find(|key| IdentityProviderConfig::is_typed_key(key))
    {
        return Err(MergeError::IncompatibleField { key: key.clone() });
    }

    fill_string(&mut config.client_id, &defaults.client_id);
    fill_string(&mut config.client_secret, &defaults.client_secret);
    fill_string(&mut config.hosted_domain, &defaults.hosted_domain);
    fill_string(&mut config.default_scope, &defaults.default_scope);
    fill_string(&mut config.sync_mode, &defaults.sync_mode);
    fill_string(&mut config.gui_order, &defaults.gui_order);

    fill_bool(&mut config.user_ip, defaults.user_ip);
    fill_bool(&mut config.offline_access, defaults.offline_access);
    fill_bool(
        &mut config.accepts_prompt_none_forward_from_client,
        defaults.accepts_prompt_none_forward_from_client,
    );
    fill_bool(&mut config.use_jwks_url, defaults.use_jwks_url);
    fill_bool(&mut config.disable_user_info, defaults.disable_user_info);

    if config.hide_on_login_page.map_or(true, KeycloakBoolQuoted::is_zero) {
        if let Some(hide) = defaults.hide_on_login_page {
            config.hide_on_login_page = Some(hide);
        }
    }

    for (key, value) in &defaults.extra_config {
        config
            .extra_config
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    Ok(())
}

fn fill_string(target: &mut String, default: &str) {
    if target.is_empty() {
        default.clone_into(target);
    }
}

fn fill_bool(target: &mut KeycloakBoolQuoted, default: KeycloakBoolQuoted) {
    if target.is_zero() {
        *target = default;
    }
}
