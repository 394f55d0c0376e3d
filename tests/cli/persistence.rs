use std::fs;

use crate::support::{add_edge, add_vertices, init_graph, ravel, setup_triangle};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_graph_survives_between_invocations() {
    let dir = tempdir().unwrap();
    setup_triangle(dir.path());

    // Every command re-reads the file written by the previous one.
    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 vertices, 3 edges"));
}

#[test]
fn test_saved_file_has_canonical_edges() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());
    add_vertices(dir.path(), 2);
    add_edge(dir.path(), "1", "0", "4");

    let raw = fs::read_to_string(dir.path().join("graph.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(value["edges"], serde_json::json!([{"u": 0, "v": 1, "w": 4.0}]));
    assert!(value["saved_at"].is_string());
}

#[test]
fn test_lenient_load_skips_out_of_range_edges() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("graph.json"),
        r#"{
            "nodes": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
            "edges": [
                {"u": 0, "v": 1, "w": 4.0},
                {"u": 0, "v": 9, "w": 1.0}
            ]
        }"#,
    )
    .unwrap();

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 vertices, 1 edges"));
}

#[test]
fn test_malformed_graph_file_is_a_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graph.json"), "{ not json").unwrap();

    ravel()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("malformed graph file"));
}

#[test]
fn test_positions_round_trip() {
    let dir = tempdir().unwrap();
    init_graph(dir.path());

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "add", "--x", "120", "--y", "80"])
        .assert()
        .success();

    ravel()
        .current_dir(dir.path())
        .args(["--format", "records", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertex index=0 label=A x=120 y=80"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("ravel.toml"),
        "[graph]\npath = \"maze.json\"\n\n[output]\nformat = \"records\"\n",
    )
    .unwrap();

    ravel().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("maze.json").exists());

    ravel()
        .current_dir(dir.path())
        .args(["vertex", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertex index=0 label=A"));

    // A flag still beats the config file.
    ravel()
        .current_dir(dir.path())
        .args(["--format", "human", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 vertices"));
}
