//! Data source reads.

use serde_json::{Value, json};

use leaseweb_provider::Diagnostics;

use crate::cli::{DataArgs, GlobalOpts};
use crate::error::CliError;

use super::util::{self, configured_provider, finish, read_json_file};

pub async fn handle(args: &DataArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let config: Value = match &args.config {
        Some(path) => read_json_file(path, "config")?,
        None => json!({}),
    };
    let provider = configured_provider(global)?;
    let mut diags = Diagnostics::new();
    let data_source = util::data_source(&provider, &args.type_name, &mut diags)?;

    let state = data_source.read(&mut diags, config).await;
    finish("read", state.as_ref(), &diags, global)
}
