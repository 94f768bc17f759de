//! Shared helpers for command handlers.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use leaseweb_provider::{
    Diagnostics, DynamicDataSource, DynamicResource, LeasewebProvider, ProviderConfig,
};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Read and parse a JSON document for `--config`, `--state` and `--plan`.
pub fn read_json_file(path: &Path, field: &str) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: field.into(),
        reason: format!("invalid JSON in {}: {e}", path.display()),
    })
}

/// Look up a resource handler by type name.
pub fn resource(
    provider: &LeasewebProvider,
    type_name: &str,
    diags: &mut Diagnostics,
) -> Result<Box<dyn DynamicResource>, CliError> {
    provider
        .resources(diags)
        .remove(type_name)
        .ok_or_else(|| CliError::UnknownType {
            kind: "resource",
            name: type_name.into(),
        })
}

/// Look up a data source handler by type name.
pub fn data_source(
    provider: &LeasewebProvider,
    type_name: &str,
    diags: &mut Diagnostics,
) -> Result<Box<dyn DynamicDataSource>, CliError> {
    provider
        .data_sources(diags)
        .remove(type_name)
        .ok_or_else(|| CliError::UnknownType {
            kind: "data source",
            name: type_name.into(),
        })
}

/// A provider with live API clients for the active profile.
pub fn configured_provider(global: &GlobalOpts) -> Result<LeasewebProvider, CliError> {
    let config: ProviderConfig = crate::config::provider_config(global)?;
    let mut provider = LeasewebProvider::new();
    let mut diags = Diagnostics::new();
    if provider.configure(&config, &mut diags) {
        Ok(provider)
    } else {
        finish::<Value>("configure", None, &diags, global).map(|()| provider)
    }
}

/// Print diagnostics and the resulting document, then turn error
/// diagnostics into a failing exit.
///
/// A partial state from an interrupted update is still printed.
pub fn finish<T: Serialize>(
    operation: &str,
    result: Option<&T>,
    diags: &Diagnostics,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    output::print_diagnostics(diags, output::should_color(&global.color));
    if let Some(document) = result {
        let out = output::render_single(&global.output, document);
        output::print_output(&out, global.quiet);
    }

    let count = diags.errors().count();
    if count > 0 {
        return Err(CliError::Diagnostics {
            operation: operation.into(),
            count,
        });
    }
    Ok(())
}
