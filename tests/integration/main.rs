//! Integration tests for the pathrex CLI
//!
//! These tests run the real binary and check its human and JSON output and
//! exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a pathrex command
fn pathrex() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("pathrex"))
}

// =============================================================================
// COMPILE
// =============================================================================

#[test]
fn test_compile_human_output() {
    pathrex()
        .args(["compile", "/user/:id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: /^/user(?:/([^/]+?))/?$/i"))
        .stdout(predicate::str::contains("[5] id"));
}

#[test]
fn test_compile_json_output() {
    let output = pathrex()
        .args(["--json", "compile", "/files/*"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "^/files/(.*)/?$");
    assert_eq!(json["flags"], "i");
    assert_eq!(json["keys"][0]["name"], 0);
    assert_eq!(json["keys"][0]["offset"], 7);
}

#[test]
fn test_compile_several_specs_joins_alternatives() {
    pathrex()
        .args(["compile", "/cats", "/dogs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("^/cats/?$|^/dogs/?$"))
        .stdout(predicate::str::contains("No keys."));
}

#[test]
fn test_compile_option_flags() {
    pathrex()
        .args(["compile", "--strict", "--prefix", "--sensitive", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: /^/admin(?:/|$)/\n"));
}

#[test]
fn test_compile_raw_pattern_extracts_keys() {
    pathrex()
        .args(["--json", "compile", "--raw", r"(?<a>\w+)/(?<b>\w+)"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "a""#))
        .stdout(predicate::str::contains(r#""name": "b""#));
}

#[test]
fn test_compile_with_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pathrex.toml");
    fs::write(&config, "[options]\nstrict = true\n").unwrap();

    pathrex()
        .args(["compile", "--config"])
        .arg(&config)
        .arg("/a")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: /^/a$/i"));
}

#[test]
fn test_compile_missing_config_fails() {
    pathrex()
        .args(["compile", "--config", "/definitely/not/here.toml", "/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading options"));
}

#[test]
fn test_compile_invalid_template_fails() {
    pathrex()
        .args(["compile", r"/:id(\d+"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid pattern"));
}

// =============================================================================
// MATCH
// =============================================================================

#[test]
fn test_match_reports_params() {
    pathrex()
        .args(["match", "/user/:id/:tab?", "/user/42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/user/42: match"))
        .stdout(predicate::str::contains("id = 42"))
        .stdout(predicate::str::contains("tab = (none)"));
}

#[test]
fn test_match_no_match_exit_code() {
    pathrex()
        .args(["match", "/user/:id", "/user/42", "/nope"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("/nope: no match"));
}

#[test]
fn test_match_json_output() {
    let output = pathrex()
        .args(["--json", "match", "/:from-:to", "/2020-01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["paths"][0]["matched"], true);
    assert_eq!(json["paths"][0]["params"][0]["value"], "2020");
    assert_eq!(json["paths"][0]["params"][1]["value"], "01");
}

#[test]
fn test_match_prefix_mode() {
    pathrex()
        .args(["match", "--prefix", "/admin", "/admin/users"])
        .assert()
        .success();

    pathrex()
        .args(["match", "--prefix", "/admin", "/administrator"])
        .assert()
        .code(2);
}

// =============================================================================
// VERSION
// =============================================================================

#[test]
fn test_version() {
    pathrex()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathrex v"));
}

#[test]
fn test_version_json() {
    pathrex()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_command_prints_hint() {
    pathrex()
        .assert()
        .success()
        .stdout(predicate::str::contains("pathrex --help"));
}
