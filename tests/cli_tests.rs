//! Integration tests for the provider binary

use assert_cmd::Command;
use predicates::prelude::*;

/// Get path to compiled binary
fn provider_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("terraform-provider-zammad")
}

/// Run the binary with the given stdin and no Zammad credentials in the environment
fn run_with_input(input: &str) -> assert_cmd::assert::Assert {
    Command::new(provider_bin())
        .env_remove("ZAMMAD_TOKEN")
        .env_remove("ZAMMAD_HOST")
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    Command::new(provider_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zammad organizations and ticket priorities"))
        .stdout(predicate::str::contains("--log-level"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    Command::new(provider_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("terraform-provider-zammad"));
}

#[test]
fn test_unknown_flag_rejected() {
    Command::new(provider_bin())
        .arg("--format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}

#[test]
fn test_empty_input_exits_cleanly() {
    run_with_input("").success().stdout(predicate::str::is_empty());
}

#[test]
fn test_get_schema() {
    run_with_input("{\"op\":\"get_schema\"}\n")
        .success()
        .stdout(predicate::str::contains("zammad_organization"))
        .stdout(predicate::str::contains("zammad_ticket_priority"))
        .stdout(predicate::str::contains("\"diagnostics\":[]"));
}

#[test]
fn test_configure_without_credentials() {
    run_with_input("{\"op\":\"configure\",\"config\":{\"host\":\"https://zammad.example.com\"}}\n")
        .success()
        .stdout(predicate::str::contains("\"severity\":\"error\""))
        .stdout(predicate::str::contains("Unable to find token"));
}

#[test]
fn test_malformed_request_keeps_serving() {
    let assert = run_with_input("not json\n{\"op\":\"get_schema\"}\n").success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Invalid request"));
    assert!(lines[1].contains("\"schema\""));
}

#[test]
fn test_unconfigured_create() {
    run_with_input(
        "{\"op\":\"create\",\"type_name\":\"zammad_organization\",\"plan\":{\"name\":\"Acme\"}}\n",
    )
    .success()
    .stdout(predicate::str::contains("Unconfigured client"));
}

#[test]
fn test_logs_stay_off_stdout() {
    Command::new(provider_bin())
        .args(["--log-level", "debug"])
        .env_remove("RUST_LOG")
        .write_stdin("{\"op\":\"get_schema\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Starting terraform-provider-zammad"));
}
