//! Refresh command.

use kc_idp::IdentityProviderVariant;
use kc_model::IdentityProvider;
use kc_schema::ResourceData;

use crate::cli::RecordArgs;
use crate::output::{output, DocumentRow};
use crate::CliResult;

use super::Context;

/// Projects a stored representation into declared attributes.
pub fn run_refresh(args: &RecordArgs, context: &Context) -> CliResult<()> {
    let content = std::fs::read_to_string(&args.file)?;
    let data = project_record(&content, args.realm.as_deref(), context)?;

    output(&DocumentRow::from_snapshot(&data.snapshot()), context.output)
}

/// Parses a JSON representation and projects it for the context's release.
///
/// Without `realm`, the configured realm is used.
pub fn project_record(content: &str, realm: Option<&str>, context: &Context) -> CliResult<ResourceData> {
    let mut provider: IdentityProvider = serde_json::from_str(content)?;
    provider.realm = realm.map_or_else(|| context.settings.keycloak.realm.clone(), str::to_string);

    let resource = context.google_resource();
    let mut data = resource.new_data();
    resource
        .variant()
        .project(&mut data, &provider, &context.keycloak_version);
    Ok(data)
}
