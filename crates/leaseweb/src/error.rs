//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` and provider diagnostics into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use leaseweb_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(leaseweb::no_token),
        help(
            "Store one with: leaseweb config set-token --profile {profile}\n\
             Or set the LEASEWEB_TOKEN environment variable."
        )
    )]
    NoToken { profile: String },

    // ── Handlers ─────────────────────────────────────────────────────
    #[error("Unknown {kind} type '{name}'")]
    #[diagnostic(
        code(leaseweb::unknown_type),
        help("Run: leaseweb resources\nOr: leaseweb data-sources")
    )]
    UnknownType { kind: &'static str, name: String },

    #[error("{operation} failed with {count} error(s)")]
    #[diagnostic(code(leaseweb::diagnostics))]
    Diagnostics { operation: String, count: usize },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(leaseweb::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(leaseweb::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: leaseweb config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(leaseweb::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    #[diagnostic(code(leaseweb::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoToken { .. } => exit_code::AUTH,
            Self::Validation { .. } | Self::UnknownType { .. } | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoToken { profile } => CliError::NoToken { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_maps_to_auth_exit_code() {
        let err = CliError::from(ConfigError::NoToken {
            profile: "default".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn diagnostics_are_a_general_failure() {
        let err = CliError::Diagnostics {
            operation: "update".into(),
            count: 2,
        };
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert_eq!(err.to_string(), "update failed with 2 error(s)");
    }
}
