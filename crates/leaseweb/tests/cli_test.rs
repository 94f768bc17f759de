//! Integration tests for the `leaseweb` CLI binary.
//!
//! These tests cover argument parsing, schema discovery, offline
//! validation and error exits without touching the Leaseweb API.
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `leaseweb` binary with env isolation.
///
/// Clears all `LEASEWEB_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn leaseweb_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("leaseweb");
    cmd.env("HOME", "/tmp/leaseweb-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/leaseweb-cli-test-nonexistent")
        .env_remove("LEASEWEB_PROFILE")
        .env_remove("LEASEWEB_TOKEN")
        .env_remove("LEASEWEB_HOST")
        .env_remove("LEASEWEB_SCHEME")
        .env_remove("LEASEWEB_OUTPUT")
        .env_remove("LEASEWEB_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn write_json(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn instance_config(term: u32) -> Value {
    json!({
        "region": "eu-west-3",
        "type": "lsw.m3.large",
        "image": { "id": "UBUNTU_24_04_64BIT" },
        "root_disk_storage_type": "CENTRAL",
        "contract": { "billing_frequency": 1, "term": term, "type": "MONTHLY" }
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = leaseweb_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    leaseweb_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("resources")
            .and(predicate::str::contains("plan"))
            .and(predicate::str::contains("import")),
    );
}

#[test]
fn test_version_flag() {
    leaseweb_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leaseweb"));
}

#[test]
fn test_invalid_subcommand() {
    let output = leaseweb_cmd().arg("provision").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    leaseweb_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    leaseweb_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Schema discovery ────────────────────────────────────────────────

#[test]
fn test_resources_lists_every_type() {
    let output = leaseweb_cmd().args(["resources", "-o", "json-compact"]).output().unwrap();
    assert!(output.status.success());

    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        names,
        vec![
            "leaseweb_dedicated_server",
            "leaseweb_dedicated_server_notification_setting_datatraffic",
            "leaseweb_public_cloud_instance",
            "leaseweb_public_cloud_load_balancer",
        ]
    );
}

#[test]
fn test_data_sources_lists_every_type() {
    leaseweb_cmd()
        .arg("data-sources")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("leaseweb_public_cloud_instances")
                .and(predicate::str::contains("leaseweb_public_cloud_credential"))
                .and(predicate::str::contains("leaseweb_dedicated_servers")),
        );
}

#[test]
fn test_schema_prints_attributes() {
    let output = leaseweb_cmd()
        .args(["schema", "leaseweb_public_cloud_instance"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["attributes"]["contract"].is_object());
    assert!(schema["attributes"]["region"].is_object());
}

#[test]
fn test_schema_of_unknown_type_is_usage_error() {
    let output = leaseweb_cmd()
        .args(["schema", "leaseweb_nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("leaseweb_nope"));
}

// ── Offline validation ──────────────────────────────────────────────

#[test]
fn test_validate_accepts_valid_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_json(&dir, "config.json", &instance_config(12));

    leaseweb_cmd()
        .args(["validate", "leaseweb_public_cloud_instance", "--config"])
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn test_validate_rejects_contract_term() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_json(&dir, "config.json", &instance_config(555));

    let output = leaseweb_cmd()
        .args(["validate", "leaseweb_public_cloud_instance", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contract.term"), "{stderr}");
}

#[test]
fn test_plan_without_state_prints_planned_value() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_json(&dir, "config.json", &instance_config(1));

    let output = leaseweb_cmd()
        .args(["plan", "leaseweb_public_cloud_instance", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["value"]["region"], "eu-west-3");
    assert_eq!(plan["value"]["contract"]["term"], 1);
}

// ── Credentials ─────────────────────────────────────────────────────

#[test]
fn test_read_without_token_is_auth_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_json(&dir, "state.json", &json!({ "id": "abc" }));

    let output = leaseweb_cmd()
        .args(["read", "leaseweb_public_cloud_instance", "--state"])
        .arg(&state)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("No API token"));
}

#[test]
fn test_unknown_profile_is_usage_error() {
    let output = leaseweb_cmd()
        .args(["import", "leaseweb_dedicated_server", "12345", "--profile", "prod"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("prod"));
}
