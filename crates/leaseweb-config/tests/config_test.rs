#![allow(clippy::unwrap_used)]
// Tests for profile loading, saving, and token resolution.

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::{ExposeSecret, SecretString};

use leaseweb_config::{
    Config, ConfigError, Defaults, Profile, TOKEN_ENV, build_provider_config, load_config_from,
    resolve_token_with, save_config_to,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_config(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), contents).unwrap();
    dir
}

// ── Loading ─────────────────────────────────────────────────────────

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.default_profile.as_deref(), Some("default"));
    assert_eq!(config.defaults, Defaults::default());
    assert!(config.profiles.is_empty());
}

#[test]
fn test_profiles_are_read_from_toml() {
    let dir = write_config(
        r#"
default_profile = "staging"

[defaults]
timeout = 10

[profiles.staging]
host = "127.0.0.1:8080"
scheme = "http"
token_env = "STAGING_TOKEN"
"#,
    );
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    let (name, profile) = config.profile(None).unwrap();
    assert_eq!(name, "staging");
    assert_eq!(profile.host.as_deref(), Some("127.0.0.1:8080"));
    assert_eq!(profile.token_env.as_deref(), Some("STAGING_TOKEN"));
    assert_eq!(config.defaults.timeout, 10);
    assert_eq!(config.defaults.output, "json");
}

#[test]
fn test_explicit_unknown_profile_is_an_error() {
    let config = Config::default();

    assert!(config.profile(None).is_ok());
    assert!(matches!(
        config.profile(Some("prod")),
        Err(ConfigError::UnknownProfile { profile }) if profile == "prod"
    ));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.profiles.insert(
        "default".into(),
        Profile {
            host: Some("api.leaseweb.com".into()),
            timeout: Some(60),
            ..Profile::default()
        },
    );
    save_config_to(&path, &config).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), config);
}

// ── Token resolution ────────────────────────────────────────────────

#[test]
fn test_token_env_takes_precedence() {
    let profile = Profile {
        token: Some("plaintext".into()),
        token_env: Some("MY_TOKEN".into()),
        ..Profile::default()
    };
    let env = |name: &str| match name {
        "MY_TOKEN" => Some("from-profile-env".to_owned()),
        n if n == TOKEN_ENV => Some("from-global-env".to_owned()),
        _ => None,
    };

    let token = resolve_token_with(&profile, "leaseweb-config-test", env).unwrap();
    assert_eq!(token.expose_secret(), "from-profile-env");
}

#[test]
fn test_global_env_used_without_token_env() {
    let env = |name: &str| (name == TOKEN_ENV).then(|| "from-global-env".to_owned());

    let token = resolve_token_with(&Profile::default(), "leaseweb-config-test", env).unwrap();
    assert_eq!(token.expose_secret(), "from-global-env");
}

#[test]
fn test_plaintext_token_is_last_resort() {
    let profile = Profile {
        token: Some("plaintext".into()),
        ..Profile::default()
    };

    let token = resolve_token_with(&profile, "leaseweb-config-test-plain", no_env).unwrap();
    assert_eq!(token.expose_secret(), "plaintext");
}

#[test]
fn test_no_token_names_profile() {
    let err = resolve_token_with(&Profile::default(), "leaseweb-config-test-none", no_env)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "no token configured for profile 'leaseweb-config-test-none'"
    );
}

// ── Provider settings ───────────────────────────────────────────────

#[test]
fn test_build_provider_config_applies_default_timeout() {
    let profile = Profile {
        host: Some("127.0.0.1:8080".into()),
        scheme: Some("http".into()),
        ..Profile::default()
    };
    let config = build_provider_config(
        &profile,
        SecretString::from("secret".to_owned()),
        &Defaults::default(),
    )
    .unwrap();

    assert_eq!(config.host.as_deref(), Some("127.0.0.1:8080"));
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_build_provider_config_rejects_unknown_scheme() {
    let profile = Profile {
        scheme: Some("ftp".into()),
        ..Profile::default()
    };
    let err = build_provider_config(
        &profile,
        SecretString::from("secret".to_owned()),
        &Defaults::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "scheme"));
}
