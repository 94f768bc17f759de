//! Command dispatch: bridges CLI args -> provider handlers -> output formatting.

pub mod config_cmd;
pub mod data;
pub mod resource;
pub mod schema;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a provider-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Resources => {
            schema::list_resources(global);
            Ok(())
        }
        Command::DataSources => {
            schema::list_data_sources(global);
            Ok(())
        }
        Command::Schema(args) => schema::show(&args, global),
        Command::Validate(args) => resource::validate(&args, global),
        Command::Plan(args) => resource::plan(&args, global),
        Command::Read(args) => resource::read(&args, global).await,
        Command::Create(args) => resource::create(&args, global).await,
        Command::Update(args) => resource::update(&args, global).await,
        Command::Delete(args) => resource::delete(&args, global).await,
        Command::Import(args) => resource::import(&args, global).await,
        Command::Data(args) => data::handle(&args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
