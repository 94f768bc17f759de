//! Clap derive structures for the `leaseweb` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// leaseweb -- drive Leaseweb resources and data sources from the command line
#[derive(Debug, Parser)]
#[command(
    name = "leaseweb",
    version,
    about = "Plan, apply and inspect Leaseweb infrastructure resources",
    long_about = "Host for the Leaseweb provider.\n\n\
        Resources and data sources take plan/state documents as JSON files\n\
        and print the resulting state. Diagnostics go to stderr.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "LEASEWEB_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API token
    #[arg(long, env = "LEASEWEB_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// API host (overrides profile)
    #[arg(long, env = "LEASEWEB_HOST", global = true)]
    pub host: Option<String>,

    /// URL scheme (overrides profile)
    #[arg(long, env = "LEASEWEB_SCHEME", global = true)]
    pub scheme: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LEASEWEB_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "LEASEWEB_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Attribute/value table
    Table,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List resource type names
    Resources,

    /// List data source type names
    DataSources,

    /// Print the schema of a resource or data source
    Schema(TypeArgs),

    /// Validate a configuration without contacting the API
    Validate(ConfigFileArgs),

    /// Plan a configuration against prior state
    Plan(PlanArgs),

    /// Refresh a resource from the API
    Read(StateArgs),

    /// Create a resource from a plan
    Create(PlanFileArgs),

    /// Update a resource from prior state and a plan
    Update(UpdateArgs),

    /// Delete a resource
    Delete(StateArgs),

    /// Import an existing object by its ID
    Import(ImportArgs),

    /// Read a data source
    Data(DataArgs),

    /// Manage CLI configuration
    #[command(alias = "cfg")]
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RESOURCE OPERATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TypeArgs {
    /// Type name, e.g. leaseweb_public_cloud_instance
    pub type_name: String,
}

#[derive(Debug, Args)]
pub struct ConfigFileArgs {
    /// Type name of a resource or data source
    pub type_name: String,

    /// Configuration JSON file
    #[arg(long, short = 'f')]
    pub config: PathBuf,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Resource type name
    pub type_name: String,

    /// Configuration JSON file
    #[arg(long, short = 'f')]
    pub config: PathBuf,

    /// Prior state JSON file (omit when creating)
    #[arg(long, short = 's')]
    pub state: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// Resource type name
    pub type_name: String,

    /// State JSON file
    #[arg(long, short = 's')]
    pub state: PathBuf,
}

#[derive(Debug, Args)]
pub struct PlanFileArgs {
    /// Resource type name
    pub type_name: String,

    /// Planned state JSON file
    #[arg(long)]
    pub plan: PathBuf,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Resource type name
    pub type_name: String,

    /// Prior state JSON file
    #[arg(long, short = 's')]
    pub state: PathBuf,

    /// Planned state JSON file
    #[arg(long)]
    pub plan: PathBuf,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Resource type name
    pub type_name: String,

    /// Remote ID (notification settings use `server_id:setting_id`)
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Data source type name
    pub type_name: String,

    /// Configuration JSON file (defaults to `{}`)
    #[arg(long, short = 'f')]
    pub config: Option<PathBuf>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Set a profile value (host, scheme, token_env, ca_cert, timeout)
    Set {
        /// Config key
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
