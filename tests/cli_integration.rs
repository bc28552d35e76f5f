//! CLI integration tests for git-ship.
//!
//! These tests verify the full workflow: config resolution, plugin
//! selection, and the lifecycle commands, against real temp directories and
//! real git repositories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the git-ship binary command.
fn git_ship() -> Command {
    Command::cargo_bin("git-ship").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a config file into the project directory.
fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join(".git-ship.conf"), contents).unwrap();
}

/// Initialize a git repository with the given remote URL (if any).
fn git_repo(dir: &Path, remote: Option<&str>) {
    Command::new("git")
        .args(["init", "-q"])
        .current_dir(dir)
        .assert()
        .success();

    if let Some(url) = remote {
        Command::new("git")
            .args(["remote", "add", "origin", url])
            .current_dir(dir)
            .assert()
            .success();
    }
}

// ============================================================================
// git-ship config
// ============================================================================

#[test]
fn test_config_shows_resolved_pairs() {
    let tmp = temp_dir();
    write_config(tmp.path(), "a = 1\nbad line\nb=2\na = 3\n");

    git_ship()
        .args(["config"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a = 3"))
        .stdout(predicate::str::contains("b = 2"))
        .stdout(predicate::str::contains("bad line").not());
}

#[test]
fn test_config_json_output() {
    let tmp = temp_dir();
    write_config(tmp.path(), "project_name = widget\n");

    git_ship()
        .args(["config", "--json"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"project_name\": \"widget\""));
}

#[test]
fn test_config_missing_file_fails_with_tool_prefix() {
    let tmp = temp_dir();

    git_ship()
        .args(["config"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("git-ship:"))
        .stderr(predicate::str::contains("failed to load config file"));
}

#[test]
fn test_config_path_env_override() {
    let tmp = temp_dir();
    let elsewhere = temp_dir();
    let config_path = elsewhere.path().join("ship.conf");
    fs::write(&config_path, "project_name = elsewhere\n").unwrap();

    git_ship()
        .args(["config"])
        .current_dir(tmp.path())
        .env("GIT_SHIP_CONFIG", &config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("project_name = elsewhere"));
}

// ============================================================================
// git-ship init
// ============================================================================

#[test]
fn test_init_seeds_config_and_derives_metadata() {
    let tmp = temp_dir();
    git_repo(tmp.path(), Some("git@github.com:acme/widget.git"));

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Created"));

    let saved = fs::read_to_string(tmp.path().join(".git-ship.conf")).unwrap();
    assert!(saved.contains("project_name = "));
    assert!(saved.contains("homepage = https://github.com/acme/widget"));
    assert!(saved.contains("bugtracker = https://github.com/acme/widget/issues"));
    assert!(saved.contains("license_name = MIT"));
}

#[test]
fn test_init_prefers_configured_repository_over_remotes() {
    let tmp = temp_dir();
    write_config(
        tmp.path(),
        "project_name = widget\nrepository = https://github.com/acme/widget.git\n",
    );

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let saved = fs::read_to_string(tmp.path().join(".git-ship.conf")).unwrap();
    assert!(saved.contains("homepage = https://github.com/acme/widget"));
}

#[test]
fn test_init_never_overwrites_present_keys() {
    let tmp = temp_dir();
    write_config(
        tmp.path(),
        "repository = https://github.com/acme/widget.git\nbugtracker = x\n",
    );

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .success();

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let saved = fs::read_to_string(tmp.path().join(".git-ship.conf")).unwrap();
    assert!(saved.contains("bugtracker = x"));
    assert!(!saved.contains("bugtracker = https://"));
}

#[test]
fn test_init_without_repository_or_matching_remote_fails() {
    let tmp = temp_dir();
    git_repo(tmp.path(), None);
    write_config(tmp.path(), "project_name = widget\n");

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository URL found"));
}

#[test]
fn test_init_ignores_non_github_remote() {
    let tmp = temp_dir();
    git_repo(tmp.path(), Some("git@gitlab.com:acme/widget.git"));
    write_config(tmp.path(), "project_name = widget\n");

    git_ship()
        .args(["init"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository URL found"));
}

// ============================================================================
// git-ship build / test / ship (script plugin)
// ============================================================================

#[test]
fn test_build_runs_configured_command() {
    let tmp = temp_dir();
    write_config(tmp.path(), "build_command = touch built.txt\n");

    git_ship()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Finished build"));

    assert!(tmp.path().join("built.txt").exists());
}

#[test]
fn test_test_runs_configured_command() {
    let tmp = temp_dir();
    write_config(tmp.path(), "test_command = true\n");

    git_ship()
        .args(["test"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn test_ship_without_command_reports_missing_key() {
    let tmp = temp_dir();
    write_config(tmp.path(), "build_command = true\n");

    git_ship()
        .args(["ship"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ship_command"));
}

#[test]
fn test_failing_command_reports_command_line_and_exit_code() {
    let tmp = temp_dir();
    write_config(tmp.path(), "build_command = false\n");

    git_ship()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("false"))
        .stderr(predicate::str::contains("exit code 1"));
}

// ============================================================================
// Plugin selection
// ============================================================================

#[test]
fn test_unknown_plugin_flag_lists_known_plugins() {
    let tmp = temp_dir();
    write_config(tmp.path(), "build_command = true\n");

    git_ship()
        .args(["build", "--plugin", "nonexistent"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown plugin `nonexistent`"))
        .stderr(predicate::str::contains("script"));
}

#[test]
fn test_plugin_config_key_selects_plugin() {
    let tmp = temp_dir();
    write_config(tmp.path(), "plugin = nonexistent\n");

    git_ship()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown plugin `nonexistent`"));
}

#[test]
fn test_plugins_lists_builtins() {
    let tmp = temp_dir();

    git_ship()
        .args(["plugins"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("script"));
}

// ============================================================================
// Debug mode
// ============================================================================

#[test]
fn test_debug_env_prints_error_chain() {
    let tmp = temp_dir();

    git_ship()
        .args(["config"])
        .current_dir(tmp.path())
        .env("GIT_SHIP_DEBUG", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("git-ship:"))
        .stderr(predicate::str::contains("Caused by"));
}
