//! Tests for CLI argument parsing against the built binary.

use std::process::Command;

fn admin_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cinema-admin"))
}

#[test]
fn test_help_lists_options() {
    let output = admin_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--api-url", "--log-file", "--no-auth", "--page"] {
        assert!(stdout.contains(flag), "missing {flag} in:\n{stdout}");
    }
}

#[test]
fn test_version_flag() {
    let output = admin_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_api_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = admin_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--api-url")
        .arg("ftp://example.com")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http or https"), "got: {stderr}");
}

#[test]
fn test_unknown_page_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = admin_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--page")
        .arg("/movies")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown page '/movies'"), "got: {stderr}");
}

#[test]
fn test_missing_config_value_shows_error() {
    let output = admin_cmd()
        .arg("--config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
