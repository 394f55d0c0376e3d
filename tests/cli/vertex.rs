use crate::support::{add_edge, add_vertices, init_graph, ravel};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_vertex_add_prints_contiguous_indices() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added vertex 0 (A)"));

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "add", "--x", "120", "--y", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added vertex 1 (B)"));
}

#[test]
fn test_vertex_rm_renumbers_survivors() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());
    add_vertices(dir.path(), 3);
    add_edge(dir.path(), "0", "1", "1");
    add_edge(dir.path(), "1", "2", "1");

    // Deleting the middle of the path 0-1-2 leaves two loose vertices.
    ravel()
        .current_dir(dir.path())
        .args(["vertex", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vertices remain"));

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vertices, 0 edges"));
}

#[test]
fn test_vertex_rm_accepts_labels() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());
    add_vertices(dir.path(), 2);

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "rm", "B"])
        .assert()
        .success();

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 vertices, 0 edges"));
}

#[test]
fn test_vertex_rm_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());
    add_vertices(dir.path(), 1);

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "rm", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_vertex_add_json_output() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());

    let output = ravel()
        .current_dir(dir.path())
        .args(["--format", "json", "vertex", "add"])
        .output()
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["index"], 0);
    assert_eq!(value["label"], "A");
}
