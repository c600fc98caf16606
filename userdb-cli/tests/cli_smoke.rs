//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("userdb").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("userdb").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_missing_db_config_is_fatal() {
    let mut cmd = Command::cargo_bin("userdb").unwrap();
    cmd.arg("init-db")
        .current_dir(std::env::temp_dir())
        .env_remove("DB_USER")
        .env_remove("DB_PASS")
        .env_remove("DB_HOST")
        .env_remove("DB_NAME");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid database configuration"));
}
