//! Schema command.

use crate::output::{output, AttributeRow};
use crate::CliResult;

use super::Context;

/// Prints the composed Google identity provider attribute set.
pub fn run_schema(context: &Context) -> CliResult<()> {
    let resource = context.google_resource();
    let rows: Vec<AttributeRow> = resource
        .schema()
        .iter()
        .map(|(name, attribute)| AttributeRow::new(name, attribute))
        .collect();
    output(&rows, context.output)
}
