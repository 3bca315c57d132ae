//! Tests for error handling, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qrcraft(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qrcraft").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_empty_payload_names_missing_field() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["wifi", "--password", "secret"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nothing to encode"))
        .stderr(predicate::str::contains("ssid"))
        .stderr(predicate::str::contains("qrcraft wifi --help"));

    assert!(!temp.path().join("qrcode.png").exists());
}

#[test]
fn test_blank_text_is_rejected() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Nothing to encode"));
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("code.png");
    fs::write(&path, b"old").unwrap();

    qrcraft(temp.path())
        .args(["text", "hello", "-o", "code.png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read(&path).unwrap(), b"old");
}

#[test]
fn test_payload_too_long_for_any_symbol() {
    let temp = TempDir::new().unwrap();
    let huge = "x".repeat(5000);

    qrcraft(temp.path())
        .args(["text", &huge, "--ecc", "H"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("capacity"));
}

#[test]
fn test_invalid_color_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "--dark", "#12345"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn test_zero_width_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "--width", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid width"));
}

#[test]
fn test_unknown_platform_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["social", "myspace", "tom"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown social platform: myspace"));
}

#[test]
fn test_platform_alias_accepted() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["social", "WA", "+1 (555) 010-0000", "--payload-only"])
        .assert()
        .success()
        .stdout("https://wa.me/15550100000\n");
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["--config", "does-not-exist.toml", "text", "hello"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["config", "get", "render.shape"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_hint_only_without_verbose() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["email"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--verbose"));

    qrcraft(temp.path())
        .args(["-v", "email"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
