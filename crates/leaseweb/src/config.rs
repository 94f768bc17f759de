//! Flag-aware wrappers over `leaseweb_config`.
//!
//! Command-line flags win over the profile, which wins over the defaults.

use secrecy::SecretString;

use leaseweb_config::{Config, ConfigError, Profile};
use leaseweb_provider::ProviderConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| leaseweb_config::DEFAULT_PROFILE.into())
}

/// Pick the profile named by `--profile` (or the default) and apply the
/// host/scheme/timeout flags on top of it.
pub fn resolve_profile(global: &GlobalOpts, config: &Config) -> Result<(String, Profile), CliError> {
    let (name, mut profile) = config
        .profile(global.profile.as_deref())
        .map_err(|e| match e {
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: available_profiles(config),
            },
            other => other.into(),
        })?;

    if let Some(host) = &global.host {
        profile.host = Some(host.clone());
    }
    if let Some(scheme) = &global.scheme {
        profile.scheme = Some(scheme.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    Ok((name, profile))
}

/// Build the provider settings for the active profile.
///
/// Token order: `--token`, then the profile's credential chain.
pub fn provider_config(global: &GlobalOpts) -> Result<ProviderConfig, CliError> {
    let config = leaseweb_config::load_config()?;
    let (name, profile) = resolve_profile(global, &config)?;

    let token = match global.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => SecretString::from(token.to_owned()),
        None => leaseweb_config::resolve_token(&profile, &name)?,
    };

    tracing::debug!(profile = %name, host = ?profile.host, "resolved provider settings");
    Ok(leaseweb_config::build_provider_config(
        &profile,
        token,
        &config.defaults,
    )?)
}

pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config
            .profiles
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
