//! Resource lifecycle handlers.
//!
//! `validate` and `plan` run offline against the schema. Everything else
//! talks to the API through a configured provider.

use serde_json::Value;

use leaseweb_provider::{Diagnostics, LeasewebProvider};

use crate::cli::{
    ConfigFileArgs, GlobalOpts, ImportArgs, PlanArgs, PlanFileArgs, StateArgs, UpdateArgs,
};
use crate::error::CliError;

use super::util::{self, configured_provider, finish, read_json_file};

// ── Offline ──────────────────────────────────────────────────────────

/// Validate a configuration for a resource or a data source.
pub fn validate(args: &ConfigFileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let config = read_json_file(&args.config, "config")?;
    let provider = LeasewebProvider::new();
    let mut diags = Diagnostics::new();

    let found = match util::resource(&provider, &args.type_name, &mut diags) {
        Ok(resource) => resource.validate(&config),
        Err(_) => util::data_source(&provider, &args.type_name, &mut diags)
            .map_err(|_| CliError::UnknownType {
                kind: "resource or data source",
                name: args.type_name.clone(),
            })?
            .validate(&config),
    };
    diags.append(found);

    finish::<Value>("validate", None, &diags, global)?;
    if !global.quiet {
        eprintln!("✓ {} configuration is valid", args.type_name);
    }
    Ok(())
}

pub fn plan(args: &PlanArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let config = read_json_file(&args.config, "config")?;
    let prior = args
        .state
        .as_deref()
        .map(|path| read_json_file(path, "state"))
        .transpose()?;

    let provider = LeasewebProvider::new();
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let planned = resource.plan(&mut diags, prior.as_ref(), &config);
    finish("plan", planned.as_ref(), &diags, global)
}

// ── Remote ───────────────────────────────────────────────────────────

pub async fn read(args: &StateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let state = read_json_file(&args.state, "state")?;
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let refreshed = resource.read(&mut diags, state).await;
    finish("read", refreshed.as_ref(), &diags, global)
}

pub async fn create(args: &PlanFileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let plan = read_json_file(&args.plan, "plan")?;
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let created = resource.create(&mut diags, plan).await;
    finish("create", created.as_ref(), &diags, global)
}

pub async fn update(args: &UpdateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let prior = read_json_file(&args.state, "state")?;
    let plan = read_json_file(&args.plan, "plan")?;
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let updated = resource.update(&mut diags, prior, plan).await;
    finish("update", updated.as_ref(), &diags, global)
}

pub async fn delete(args: &StateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let state = read_json_file(&args.state, "state")?;
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let deleted = resource.delete(&mut diags, state).await;
    finish::<Value>("delete", None, &diags, global)?;
    if deleted.is_some() && !global.quiet {
        eprintln!("✓ {} removed", args.type_name);
    }
    Ok(())
}

pub async fn import(args: &ImportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let resource = util::resource(&provider, &args.type_name, &mut diags)?;

    let imported = resource.import_state(&mut diags, args.id.clone()).await;
    finish("import", imported.as_ref(), &diags, global)
}
