//! Schema discovery: `resources`, `data-sources`, `schema <type>`.
//!
//! None of these need credentials.

use leaseweb_provider::{Diagnostics, LeasewebProvider};

use crate::cli::{GlobalOpts, TypeArgs};
use crate::error::CliError;
use crate::output;

pub fn list_resources(global: &GlobalOpts) {
    let mut names: Vec<String> = LeasewebProvider::new()
        .resources(&mut Diagnostics::new())
        .into_keys()
        .collect();
    names.sort();
    output::print_output(&output::render_names(&global.output, &names), global.quiet);
}

pub fn list_data_sources(global: &GlobalOpts) {
    let mut names: Vec<String> = LeasewebProvider::new()
        .data_sources(&mut Diagnostics::new())
        .into_keys()
        .collect();
    names.sort();
    output::print_output(&output::render_names(&global.output, &names), global.quiet);
}

/// Print the schema of a resource, a data source, or the provider itself.
pub fn show(args: &TypeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let provider = LeasewebProvider::new();
    let mut diags = Diagnostics::new();

    let schema = if args.type_name == LeasewebProvider::TYPE_NAME {
        Some(LeasewebProvider::schema())
    } else {
        provider
            .resources(&mut diags)
            .remove(&args.type_name)
            .map(|r| r.schema())
            .or_else(|| {
                provider
                    .data_sources(&mut diags)
                    .remove(&args.type_name)
                    .map(|d| d.schema())
            })
    };

    let schema = schema.ok_or_else(|| CliError::UnknownType {
        kind: "resource or data source",
        name: args.type_name.clone(),
    })?;
    output::print_output(&output::render_single(&global.output, &schema), global.quiet);
    Ok(())
}
