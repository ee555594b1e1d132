//! Integration tests for the squad CLI
//!
//! These run the actual binary. The dashboard itself needs a terminal, so
//! they exercise the surfaces that return before the TUI starts.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test, with a clean squad environment.
fn squad_cmd() -> Command {
    let mut cmd = Command::cargo_bin("squad").unwrap();
    cmd.env_remove("SQUAD_AS_API")
        .env_remove("SQUAD_DM_API")
        .env_remove("SQUAD_API_TOKEN")
        .env_remove("SQUAD_LOGFILE")
        .env_remove("SQUAD_REFRESH_SECONDS");
    cmd
}

#[test]
fn test_help_flag() {
    squad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal dashboard for a Squonk2 Account Server / Data Manager pair",
        ))
        .stdout(predicate::str::contains("--interval"));
}

#[test]
fn test_version_flag() {
    squad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("squad"));
}

#[test]
fn test_topics_lists_every_topic() {
    let mut assert = squad_cmd().arg("topics").assert().success();

    for name in [
        "assets",
        "datasets",
        "defined-exchange-rates",
        "instances",
        "merchants",
        "personal-units",
        "products",
        "projects",
        "service-errors",
        "undefined-exchange-rates",
        "units",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

#[test]
fn test_missing_environment_is_fatal_with_fix() {
    squad_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("SQUAD_AS_API"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_bad_refresh_seconds_is_fatal() {
    squad_cmd()
        .env("SQUAD_AS_API", "https://as.example.com/api")
        .env("SQUAD_DM_API", "https://dm.example.com/api")
        .env("SQUAD_REFRESH_SECONDS", "soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SQUAD_REFRESH_SECONDS"));
}

#[test]
fn test_unwritable_logfile_is_fatal_with_fix() {
    squad_cmd()
        .env("SQUAD_AS_API", "https://as.example.com/api")
        .env("SQUAD_DM_API", "https://dm.example.com/api")
        .env("SQUAD_LOGFILE", "/nonexistent-dir/squad.log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"))
        .stderr(predicate::str::contains("Check file path and permissions"));
}

#[test]
fn test_zero_interval_flag_is_rejected() {
    squad_cmd()
        .env("SQUAD_AS_API", "https://as.example.com/api")
        .env("SQUAD_DM_API", "https://dm.example.com/api")
        .args(["--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval"));
}
