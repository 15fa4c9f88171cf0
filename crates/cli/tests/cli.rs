//! Integration tests for the `projects` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn projects(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("projects").expect("binary should build");
    cmd.arg("--db").arg(db_path).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_then_list() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");

    projects(&db_path)
        .args(["add", "/home/u/app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dea8c9"));

    projects(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dea8c9").and(predicate::str::contains("/home/u/app")));
}

#[test]
fn test_list_empty_registry() {
    let dir = tempdir().expect("Failed to create temp dir");

    projects(&dir.path().join("data.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects registered"));
}

#[test]
fn test_use_rejects_project_still_creating() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");

    projects(&db_path).args(["add", "/home/u/app"]).assert().success();
    projects(&db_path)
        .args(["progress", "dea8c9", "--step", "1", "--status", "0", "--steps", "init,install"])
        .assert()
        .success();

    projects(&db_path)
        .args(["use", "dea8c9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project of key dea8c9 is still creating"));

    projects(&db_path)
        .args(["progress", "dea8c9", "--success"])
        .assert()
        .success();
    projects(&db_path).args(["use", "dea8c9"]).assert().success();

    let output = projects(&db_path)
        .args(["--json", "show"])
        .output()
        .expect("Failed to run show");
    let state: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show prints JSON");
    assert_eq!(state["currentProject"], "dea8c9");
    assert_eq!(state["projectsByKey"]["dea8c9"]["creatingProgress"]["steps"][1], "install");
}

#[test]
fn test_show_summary_without_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");

    projects(&db_path).args(["add", "/home/u/app"]).assert().success();
    projects(&db_path).args(["use", "dea8c9"]).assert().success();

    projects(&db_path)
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("current:")
                .and(predicate::str::contains("dea8c9"))
                .and(predicate::str::contains("projects:    1"))
                .and(predicate::str::contains("\"projectsByKey\"").not()),
        );
}

#[test]
fn test_use_unknown_key_fails() {
    let dir = tempdir().expect("Failed to create temp dir");

    projects(&dir.path().join("data.json"))
        .args(["use", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project of key abc123 not found"));
}

#[test]
fn test_open_relative_path_sets_current() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");
    let work = dir.path().join("work");
    std::fs::create_dir_all(&work).expect("Failed to create work dir");

    projects(&db_path)
        .current_dir(&work)
        .args(["--json", "open", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"site\""));

    let output = projects(&db_path).args(["--json", "show"]).output().expect("Failed to run show");
    let state: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show prints JSON");
    assert!(state["currentProject"].is_string());
}

#[test]
fn test_edit_requires_a_field() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");

    projects(&db_path).args(["add", "/home/u/app"]).assert().success();
    projects(&db_path)
        .args(["edit", "dea8c9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to edit"));

    projects(&db_path)
        .args(["--json", "edit", "dea8c9", "--npm-client", "yarn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"npmClient\": \"yarn\""));
}

#[test]
fn test_remove_missing_key_succeeds() {
    let dir = tempdir().expect("Failed to create temp dir");

    projects(&dir.path().join("data.json"))
        .args(["--json", "remove", "000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"removed\": false"));
}

#[test]
fn test_malformed_registry_is_reported() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("data.json");
    std::fs::write(&db_path, "not json").expect("Failed to write file");

    projects(&db_path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open project registry"));
}
