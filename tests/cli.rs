// ABOUTME: Integration tests for the cf-swap CLI commands.
// ABOUTME: Validates --help output, init behavior, and error reporting with a fake cf.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;

fn cf_swap_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cf-swap"))
}

#[test]
fn help_shows_commands() {
    cf_swap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("swap"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn swap_requires_candidate_and_host() {
    cf_swap_cmd()
        .args(["swap", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--candidate"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("cf-swap.yml");

    cf_swap_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "cf-swap.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("cf_binary:"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("cf-swap.yml"), "cf_binary: cf\n").unwrap();

    cf_swap_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn swap_failure_prints_platform_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let cf = temp_dir.path().join("fake-cf");
    fs::write(&cf, "#!/bin/sh\necho FAILED\necho \"App $2 not found\"\nexit 1\n").unwrap();
    let mut perms = fs::metadata(&cf).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&cf, perms).unwrap();

    fs::write(
        temp_dir.path().join("cf-swap.yml"),
        format!("cf_binary: {}\n", cf.display()),
    )
    .unwrap();

    cf_swap_cmd()
        .current_dir(temp_dir.path())
        .args(["swap", "web", "--candidate", "web-next", "--host", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app web not found"))
        .stderr(predicate::str::contains("App web not found"));
}

#[test]
fn unknown_destination_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    cf_swap_cmd()
        .current_dir(temp_dir.path())
        .args(["inspect", "web", "--destination", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown destination: prod"));
}
