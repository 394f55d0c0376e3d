use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for ravel
pub fn ravel() -> Command {
    cargo_bin_cmd!("ravel")
}

/// Initialize an empty graph file in `dir`
pub fn init_graph(dir: &Path) {
    ravel().current_dir(dir).arg("init").assert().success();
}

/// Add `count` vertices
pub fn add_vertices(dir: &Path, count: usize) {
    for _ in 0..count {
        ravel()
            .current_dir(dir)
            .args(["vertex", "add"])
            .assert()
            .success();
    }
}

/// Add one weighted edge
pub fn add_edge(dir: &Path, u: &str, v: &str, w: &str) {
    ravel()
        .current_dir(dir)
        .args(["edge", "add", u, v, w])
        .assert()
        .success();
}

/// Triangle used across the algorithm tests:
/// vertices A, B, C with edges (0,1,4), (1,2,2), (0,2,5)
#[allow(dead_code)]
pub fn setup_triangle(dir: &Path) {
    init_graph(dir);
    add_vertices(dir, 3);
    add_edge(dir, "0", "1", "4");
    add_edge(dir, "1", "2", "2");
    add_edge(dir, "0", "2", "5");
}

/// Two disjoint triangles: {0,1,2} and {3,4,5}, fully connected internally
#[allow(dead_code)]
pub fn setup_two_triangles(dir: &Path) {
    init_graph(dir);
    add_vertices(dir, 6);
    for (u, v, w) in [
        ("0", "1", "1"),
        ("1", "2", "2"),
        ("0", "2", "3"),
        ("3", "4", "1"),
        ("4", "5", "2"),
        ("3", "5", "3"),
    ] {
        add_edge(dir, u, v, w);
    }
}
