//! Integration tests for argument parsing, dispatch and early validation.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn cominty() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cominty"));
    cmd.env("NO_COLOR", "1").env_remove("COMINTY_CONFIG");
    cmd
}

/// A command running in an empty directory, so no `cominty.yaml` is found.
fn cominty_in_empty_dir() -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = cominty();
    cmd.current_dir(dir.path());
    (cmd, dir)
}

// --- Help and version ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    cominty().assert().code(2).stderr(predicate::str::contains(
        "Build, run, publish and deploy the cominty service",
    ));
}

#[test]
fn test_cli_help_lists_every_command() {
    let assert = cominty().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in [
        "format",
        "check",
        "test",
        "all",
        "build",
        "push",
        "server",
        "chat",
        "plan",
        "apply",
        "destroy",
        "create_chat_table",
        "update_chat_table",
        "version",
    ] {
        assert!(stdout.contains(name), "help is missing {name}:\n{stdout}");
    }
}

#[test]
fn test_cli_version_flag_shows_version() {
    cominty()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cominty"));
}

#[test]
fn test_version_command_shows_version() {
    cominty()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "cominty {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_command_is_usage_error() {
    cominty()
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Aliases ---

#[test]
fn test_tests_alias_resolves_to_test() {
    cominty()
        .args(["tests", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--minimal"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_kebab_case_stack_aliases() {
    for name in ["create-chat-table", "update-chat-table"] {
        cominty()
            .args([name, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--env"));
    }
}

// --- Early validation (nothing external runs) ---

#[test]
fn test_plan_rejects_unknown_workspace() {
    let (mut cmd, _dir) = cominty_in_empty_dir();
    cmd.args(["plan", "--workspace", "qa"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid workspace: qa"))
        .stderr(predicate::str::contains("dev, staging, production"));
}

#[test]
fn test_failure_is_reported_with_error_marker_even_when_quiet() {
    let (mut cmd, _dir) = cominty_in_empty_dir();
    cmd.args(["plan", "--workspace", "qa", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("  ✗ Error: Invalid workspace: qa"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_apply_and_destroy_reject_unknown_workspace() {
    for command in ["apply", "destroy"] {
        let (mut cmd, _dir) = cominty_in_empty_dir();
        cmd.args([command, "--workspace", "prod", "--auto-approve"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid workspace: prod"));
    }
}

#[test]
fn test_plan_requires_workspace() {
    cominty()
        .arg("plan")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--workspace"));
}

#[test]
fn test_push_rejects_malformed_version() {
    let (mut cmd, _dir) = cominty_in_empty_dir();
    cmd.args(["push", "--version", "1.2.3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid version format '1.2.3'"));
}

#[test]
fn test_push_requires_version() {
    cominty()
        .arg("push")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--version"));
}

#[test]
fn test_create_chat_table_rejects_unknown_env_before_prompting() {
    let (mut cmd, _dir) = cominty_in_empty_dir();
    cmd.args(["create_chat_table", "--env", "qa"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid workspace: qa"));
}

#[test]
fn test_global_flags_accepted_after_subcommand() {
    let (mut cmd, _dir) = cominty_in_empty_dir();
    cmd.args(["update_chat_table", "--env", "qa", "--yes", "--quiet", "--no-color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid workspace: qa"));
}

#[test]
fn test_build_flags_conflict_free() {
    cominty()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-remote"))
        .stdout(predicate::str::contains("--no-cache"));
}
