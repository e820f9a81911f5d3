//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, data: &str) {
    fs::write(dir.join("kuberlr.conf"), data).expect("write config");
}

/// Three source directories laid out like /usr/etc, /etc and ~/.kube.
fn layered_sources() -> (TempDir, TempDir, TempDir) {
    let usr_etc = TempDir::new().expect("tmp");
    let etc = TempDir::new().expect("tmp");
    let home = TempDir::new().expect("tmp");
    write_config(usr_etc.path(), "AllowDownload = false\nSystemPath = \"global\"\nTimeout = 2\n");
    write_config(etc.path(), "Timeout = 200\n");
    write_config(home.path(), "AllowDownload = true\n");
    (usr_etc, etc, home)
}

fn cmd_with_dirs(args: &[&str], dirs: &[&Path]) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kuberlr-config"));
    cmd.args(args);
    for dir in dirs {
        cmd.arg("--dir").arg(dir);
    }
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kuberlr-config"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("kuberlr-config"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kuberlr-config"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Layered kuberlr.conf loader"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("paths"));
}

#[test]
fn test_show_prints_merged_values_sorted() {
    let (usr_etc, etc, home) = layered_sources();
    cmd_with_dirs(&["show"], &[usr_etc.path(), etc.path(), home.path()])
        .assert()
        .success()
        .stdout("AllowDownload = true\nSystemPath = \"global\"\nTimeout = 200\n");
}

#[test]
fn test_show_json() {
    let (usr_etc, etc, home) = layered_sources();
    let output = cmd_with_dirs(&["show", "--json"], &[usr_etc.path(), etc.path(), home.path()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["AllowDownload"], serde_json::json!(true));
    assert_eq!(json["Timeout"], serde_json::json!(200));
    assert_eq!(json["SystemPath"], serde_json::json!("global"));
}

#[test]
fn test_get_raw_value() {
    let (usr_etc, etc, home) = layered_sources();
    cmd_with_dirs(&["get", "Timeout"], &[usr_etc.path(), etc.path(), home.path()])
        .assert()
        .success()
        .stdout("200\n");
}

#[test]
fn test_get_missing_key_fails_without_type() {
    let (usr_etc, etc, home) = layered_sources();
    cmd_with_dirs(&["get", "KubeMirrorUrl"], &[usr_etc.path(), etc.path(), home.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not set: KubeMirrorUrl"));
}

#[test]
fn test_get_typed_value_falls_back_to_zero() {
    let (usr_etc, etc, home) = layered_sources();
    let dirs = [usr_etc.path(), etc.path(), home.path()];
    cmd_with_dirs(&["get", "Missing", "--as", "int"], &dirs).assert().success().stdout("0\n");
    cmd_with_dirs(&["get", "SystemPath", "--as", "int"], &dirs).assert().success().stdout("0\n");
    cmd_with_dirs(&["get", "SystemPath", "--as", "string"], &dirs)
        .assert()
        .success()
        .stdout("global\n");
    cmd_with_dirs(&["get", "AllowDownload", "--as", "bool"], &dirs)
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_settings_apply_defaults() {
    let dir = TempDir::new().expect("tmp");
    write_config(dir.path(), "AllowDownload = false\n");
    cmd_with_dirs(&["settings"], &[dir.path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("AllowDownload: false"))
        .stdout(predicate::str::contains("Timeout: 5s"))
        .stdout(predicate::str::contains("SystemPath: (unset)"))
        .stdout(predicate::str::contains("KubeMirrorUrl: https://dl.k8s.io"));
}

#[test]
fn test_paths_reports_found_and_missing() {
    let found = TempDir::new().expect("tmp");
    let empty = TempDir::new().expect("tmp");
    write_config(found.path(), "Timeout = 1\n");

    cmd_with_dirs(&["paths"], &[found.path(), empty.path()])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)^found\s+\S*kuberlr\.conf\nmissing\s+\S*kuberlr\.conf\n$").expect("regex"));
}

#[test]
fn test_paths_reports_unreadable_source_as_error() {
    let dir = TempDir::new().expect("tmp");
    fs::create_dir(dir.path().join("kuberlr.conf")).expect("mkdir");

    cmd_with_dirs(&["paths"], &[dir.path()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("error"));
}

#[test]
fn test_rust_log_enables_debug_output() {
    let dir = TempDir::new().expect("tmp");
    write_config(dir.path(), "Timeout = 3\n");

    cmd_with_dirs(&["show"], &[dir.path()])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Timeout = 3\n")
        .stderr(predicate::str::contains("Merging 1 key(s)"));
}

#[test]
fn test_default_log_level_hides_debug_output() {
    let dir = TempDir::new().expect("tmp");
    write_config(dir.path(), "Timeout = 3\n");

    cmd_with_dirs(&["show"], &[dir.path()])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Merging").not());

    cmd_with_dirs(&["--verbose", "show"], &[dir.path()])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Merging 1 key(s)"));
}

#[test]
fn test_nonexistent_dir_is_not_an_error() {
    let dir = TempDir::new().expect("tmp");
    let missing = dir.path().join("nope");
    cmd_with_dirs(&["show"], &[missing.as_path()]).assert().success().stdout("");
}

#[test]
fn test_malformed_config_aborts() {
    let good = TempDir::new().expect("tmp");
    let bad = TempDir::new().expect("tmp");
    write_config(good.path(), "Timeout = 1\n");
    write_config(bad.path(), "Timeout = = 2\n");

    cmd_with_dirs(&["show"], &[good.path(), bad.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load kuberlr configuration"))
        .stderr(predicate::str::contains("Invalid config syntax"));
}
