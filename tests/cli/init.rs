use crate::support::ravel;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_graph_file() {
    let dir = tempdir().unwrap();

    ravel()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized empty graph"));

    assert!(dir.path().join("graph.json").exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();

    ravel().current_dir(dir.path()).arg("init").assert().success();

    ravel()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
    let dir = tempdir().unwrap();

    ravel().current_dir(dir.path()).arg("init").assert().success();
    ravel()
        .current_dir(dir.path())
        .args(["vertex", "add"])
        .assert()
        .success();

    ravel()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 vertices"));
}

#[test]
fn test_init_respects_graph_flag() {
    let dir = tempdir().unwrap();

    ravel()
        .current_dir(dir.path())
        .args(["--graph", "maze.json", "init"])
        .assert()
        .success();

    assert!(dir.path().join("maze.json").exists());
    assert!(!dir.path().join("graph.json").exists());
}

#[test]
fn test_commands_require_graph_file() {
    let dir = tempdir().unwrap();

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}
