//! Integration tests for qrcraft-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `qrcraft` command isolated from the user's config and environment.
fn qrcraft(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qrcraft").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("QRCRAFT__RENDER__WIDTH");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_content_types() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wifi"))
        .stdout(predicate::str::contains("vcard"))
        .stdout(predicate::str::contains("app-store"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── payloads ──────────────────────────────────────────────────────────────────

#[test]
fn test_text_payload_only() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "  Hello, world ", "--payload-only"])
        .assert()
        .success()
        .stdout("Hello, world\n");
}

#[test]
fn test_wifi_payload_escapes_fields() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args([
            "wifi",
            "--ssid",
            "Cafe;Bar",
            "--password",
            "p:ss",
            "--hidden",
            "--payload-only",
        ])
        .assert()
        .success()
        .stdout("WIFI:T:WPA;S:Cafe\\;Bar;P:p\\:ss;H:true;;\n");
}

#[test]
fn test_email_payload_percent_encodes() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args([
            "email",
            "--to",
            "jane@example.com",
            "--subject",
            "Hi there",
            "--payload-only",
        ])
        .assert()
        .success()
        .stdout("mailto:jane@example.com?subject=Hi%20there\n");
}

#[test]
fn test_vcard_payload() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args([
            "vcard",
            "--first-name",
            "Jane",
            "--last-name",
            "Doe",
            "--org",
            "Acme",
            "--payload-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCARD"))
        .stdout(predicate::str::contains("FN:Jane Doe"))
        .stdout(predicate::str::contains("ORG:Acme"))
        .stdout(predicate::str::contains("END:VCARD"));
}

#[test]
fn test_social_strips_at_sign() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["social", "instagram", "@ferris", "--payload-only"])
        .assert()
        .success()
        .stdout("https://instagram.com/ferris\n");
}

#[test]
fn test_app_store_prefers_ios() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args([
            "app-store",
            "--ios",
            "https://apps.apple.com/app/id1",
            "--android",
            "https://play.google.com/store/apps/details?id=x",
            "--payload-only",
        ])
        .assert()
        .success()
        .stdout("https://apps.apple.com/app/id1\n");
}

#[test]
fn test_json_report_for_payload() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["--output-format", "json", "phone", "+1 555 0100", "--payload-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content_type\": \"phone\""))
        .stdout(predicate::str::contains("\"payload\": \"tel:+15550100\""));
}

// ── images ────────────────────────────────────────────────────────────────────

#[test]
fn test_png_written_to_output() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "https://example.com", "-o", "code.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code.png"));

    let bytes = fs::read(temp.path().join("code.png")).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_extension_added_for_svg() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "-o", "code", "--format", "svg"])
        .assert()
        .success();

    let svg = fs::read_to_string(temp.path().join("code.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("shape-rendering=\"crispEdges\""));
}

#[test]
fn test_both_formats_written() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "-o", "out/code.png", "--format", "both"])
        .assert()
        .success();

    assert!(temp.path().join("out/code.png").is_file());
    assert!(temp.path().join("out/code.svg").is_file());
}

#[test]
fn test_default_file_name_in_current_dir() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["phone", "555 0100"])
        .assert()
        .success();

    assert!(temp.path().join("qrcode.png").is_file());
}

#[test]
fn test_existing_file_overwritten_with_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("code.png");
    fs::write(&path, b"old").unwrap();

    qrcraft(temp.path())
        .args(["text", "hello", "-o", "code.png", "--force"])
        .assert()
        .success();

    assert_ne!(fs::read(&path).unwrap(), b"old");
}

#[test]
fn test_data_url_writes_no_file() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "--data-url"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));

    assert!(!temp.path().join("qrcode.png").exists());
}

#[test]
fn test_svg_data_url() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "--data-url", "--format", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_terminal_preview() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["text", "hello", "--terminal", "--margin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2588}").or(predicate::str::contains("\u{2580}")));

    assert!(!temp.path().join("qrcode.png").exists());
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn test_config_get_default() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["config", "get", "render.width"])
        .assert()
        .success()
        .stdout("300\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("qrcraft.toml");
    fs::write(&config, "[render]\nmargin = 5\n\n[output]\nformat = \"svg\"\n").unwrap();

    qrcraft(temp.path())
        .args(["--config", "qrcraft.toml", "config", "get", "render.margin"])
        .assert()
        .success()
        .stdout("5\n");

    qrcraft(temp.path())
        .args(["--config", "qrcraft.toml", "text", "hello"])
        .assert()
        .success();
    assert!(temp.path().join("qrcode.svg").is_file());
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .env("QRCRAFT__RENDER__WIDTH", "640")
        .args(["config", "get", "render.width"])
        .assert()
        .success()
        .stdout("640\n");
}

#[test]
fn test_config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("custom.toml"), "").unwrap();

    qrcraft(temp.path())
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("custom.toml\n");
}

#[test]
#[cfg(target_os = "linux")]
fn test_init_writes_default_config() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path()).arg("init").assert().success();

    let written = fs::read_to_string(temp.path().join("config/qrcraft/config.toml")).unwrap();
    assert!(written.contains("[render]"));
    assert!(written.contains("margin = 2"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_bash_completions() {
    let temp = TempDir::new().unwrap();
    qrcraft(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qrcraft"));
}
