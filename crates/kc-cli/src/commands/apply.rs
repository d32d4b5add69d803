//! Apply command.

use kc_admin_client::InMemoryAdminApi;

use crate::cli::DocumentArgs;
use crate::output::{output, success, DocumentRow};
use crate::CliResult;

use super::Context;

/// Creates the identity provider on an in-memory server and prints the
/// refreshed document.
pub async fn run_apply(args: &DocumentArgs, context: &Context) -> CliResult<()> {
    let resource = context.google_resource();
    let mut data = context.load_document(&resource, &args.file)?;

    let api = InMemoryAdminApi::new(context.keycloak_version);
    resource.create(&api, &mut data).await?;

    success(&format!(
        "Created identity provider '{}' (dry run, Keycloak {})",
        data.id().unwrap_or_default(),
        context.keycloak_version
    ));
    output(&DocumentRow::from_snapshot(&data.snapshot()), context.output)
}
