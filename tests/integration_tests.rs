//! Integration tests for the DayBrief CLI
//!
//! These exercise the binary's argument validation, which runs before any
//! client is constructed, so no network access or access keys are needed.

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("daybrief"));
    assert!(stdout.contains("Daily briefing"));
}

/// Unknown country codes are rejected before any network call
#[test]
fn test_unknown_country_fails_fast() {
    let output = Command::new("cargo")
        .args(["run", "--", "--country", "zz"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("zz"));
}

/// Unknown news categories are rejected before any network call
#[test]
fn test_unknown_category_fails_fast() {
    let output = Command::new("cargo")
        .args(["run", "--", "--category", "gossip"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("gossip"));
}

/// An explicitly empty city is rejected
#[test]
fn test_empty_city_rejected() {
    let output = Command::new("cargo")
        .args(["run", "--", "--city", ""])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("City cannot be empty"));
}

/// Without configured access keys the run stops with a key error,
/// never with a literal fallback
#[test]
fn test_missing_access_keys_reported() {
    let output = Command::new("cargo")
        .env("DAYBRIEF_WEATHER__API_KEY", "")
        .env("DAYBRIEF_NEWS__API_KEY", "")
        .args(["run", "--", "--country", "gb"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("access key"), "got: {stderr}");
}
