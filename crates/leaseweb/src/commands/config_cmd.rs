//! Config subcommand handlers.

use dialoguer::{Input, Select};
use secrecy::{ExposeSecret, SecretString};

use leaseweb_config::{self as lwconfig, Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{active_profile_name, available_profiles};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_token() -> Result<SecretString, CliError> {
    let token = rpassword::prompt_password("API token: ").map_err(prompt_err)?;
    if token.is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "API token cannot be empty".into(),
        });
    }
    Ok(SecretString::from(token))
}

/// Hide plaintext tokens before printing the configuration.
fn redacted(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("********".into());
        }
    }
    cfg
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(),

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(lwconfig::load_config()?);
            let out = output::render_single(&global.output, &cfg);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = lwconfig::load_config()?;
            let profile_name = active_profile_name(global, &cfg);
            let profile = cfg.profiles.entry(profile_name.clone()).or_default();
            set_key(profile, &key, value)?;

            lwconfig::save_config(&cfg)?;
            eprintln!("✓ Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = lwconfig::load_config()?;
            let default = cfg
                .default_profile
                .as_deref()
                .unwrap_or(lwconfig::DEFAULT_PROFILE);
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: leaseweb config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = lwconfig::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            lwconfig::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            let cfg = lwconfig::load_config()?;
            let profile_name = profile.unwrap_or_else(|| active_profile_name(global, &cfg));

            let token = prompt_token()?;
            lwconfig::store_token(&profile_name, &token)?;
            eprintln!("✓ Token stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}

fn set_key(profile: &mut Profile, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "host" => profile.host = Some(value),
        "scheme" => {
            if value != "http" && value != "https" {
                return Err(CliError::Validation {
                    field: "scheme".into(),
                    reason: "must be 'http' or 'https'".into(),
                });
            }
            profile.scheme = Some(value);
        }
        "token" => profile.token = Some(value),
        "token_env" | "token-env" => profile.token_env = Some(value),
        "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
        "timeout" => {
            profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                field: "timeout".into(),
                reason: "must be a number (seconds)".into(),
            })?);
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: host, scheme, token, \
                     token_env, ca_cert, timeout"
                ),
            });
        }
    }
    Ok(())
}

// ── Init: interactive wizard ────────────────────────────────────────

fn init() -> Result<(), CliError> {
    let config_path = lwconfig::config_path();
    eprintln!("Leaseweb CLI configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(lwconfig::DEFAULT_PROFILE.into())
        .interact_text()
        .map_err(prompt_err)?;

    let host: String = Input::new()
        .with_prompt("API host")
        .default("api.leaseweb.com".into())
        .interact_text()
        .map_err(prompt_err)?;

    let token = prompt_token()?;

    let store_choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let store_selection = Select::new()
        .with_prompt("Where to store the API token?")
        .items(store_choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let plaintext = if store_selection == 0 {
        lwconfig::store_token(&profile_name, &token)?;
        eprintln!("   ✓ Token stored in system keyring");
        None
    } else {
        Some(token.expose_secret().to_owned())
    };

    let mut cfg = lwconfig::load_config_or_default();
    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            host: Some(host),
            token: plaintext,
            ..Profile::default()
        },
    );
    cfg.default_profile = Some(profile_name.clone());
    lwconfig::save_config(&cfg)?;

    eprintln!("\n✓ Configuration written to {}", config_path.display());
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Test it: leaseweb data leaseweb_public_cloud_instances");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_key_updates_profile_fields() {
        let mut profile = Profile::default();
        set_key(&mut profile, "host", "127.0.0.1:8080".into()).unwrap();
        set_key(&mut profile, "token-env", "LSW_TOKEN".into()).unwrap();
        set_key(&mut profile, "timeout", "90".into()).unwrap();

        assert_eq!(profile.host.as_deref(), Some("127.0.0.1:8080"));
        assert_eq!(profile.token_env.as_deref(), Some("LSW_TOKEN"));
        assert_eq!(profile.timeout, Some(90));
    }

    #[test]
    fn set_key_rejects_bad_values() {
        let mut profile = Profile::default();
        assert!(set_key(&mut profile, "scheme", "ftp".into()).is_err());
        assert!(set_key(&mut profile, "timeout", "soon".into()).is_err());
        assert!(set_key(&mut profile, "site", "AMS-01".into()).is_err());
    }

    #[test]
    fn show_hides_plaintext_tokens() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                token: Some("secret".into()),
                ..Profile::default()
            },
        );
        let shown = redacted(cfg);
        assert_eq!(
            shown.profiles["default"].token.as_deref(),
            Some("********")
        );
    }
}
