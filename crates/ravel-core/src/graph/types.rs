//! Result types produced by the graph algorithms
//!
//! Disconnection and unreachability are ordinary outcomes, so they are
//! variants here rather than errors.

use serde::Serialize;

/// One accepted tree edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Spanning forest rooted at a start vertex
///
/// `edges` is in discovery order; `unreached` lists the vertices the
/// traversal never touched, in ascending index order.
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    pub root: usize,
    pub edges: Vec<TreeEdge>,
    pub unreached: Vec<usize>,
}

impl SpanningTree {
    /// Vertices reached from the root, the root included
    pub fn reached_count(&self) -> usize {
        self.edges.len() + 1
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathResult {
    Found(Route),
    Unreachable,
}

impl PathResult {
    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Found(route) => Some(route),
            PathResult::Unreachable => None,
        }
    }
}

/// A concrete shortest path
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub distance: f64,
    /// Vertices from source to destination, inclusive
    pub vertices: Vec<usize>,
}

/// Outcome of a minimum-spanning-tree query
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MstResult {
    Tree(Mst),
    Disconnected,
}

impl MstResult {
    pub fn tree(&self) -> Option<&Mst> {
        match self {
            MstResult::Tree(mst) => Some(mst),
            MstResult::Disconnected => None,
        }
    }
}

/// A minimum spanning tree
#[derive(Debug, Clone, Serialize)]
pub struct Mst {
    pub edges: Vec<TreeEdge>,
    pub total_weight: f64,
}
