//! Plan command.

use crate::cli::DocumentArgs;
use crate::output::{info, output_single};
use crate::CliResult;

use super::Context;

/// Prints the admin API representation for a declared document.
///
/// The client secret is redacted.
pub fn run_plan(args: &DocumentArgs, context: &Context) -> CliResult<()> {
    let resource = context.google_resource();
    let data = context.load_document(&resource, &args.file)?;
    let provider = resource.plan(&data, &context.keycloak_version)?;

    info(&format!(
        "Planned identity provider '{}' in realm '{}' for Keycloak {}",
        provider.alias, provider.realm, context.keycloak_version
    ));
    output_single(&provider.redacted(), context.output)
}
