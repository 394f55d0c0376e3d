//! Graph document persistence
//!
//! A [`Document`] is a graph plus one display position per vertex. The
//! positions are opaque to the algorithms; they exist so an interactive
//! caller can lay the graph out and get the same picture back after a
//! round-trip.
//!
//! On disk the document is a JSON file with a `nodes` array (positions,
//! vertex count implied by length) and an `edges` array of canonical
//! `{u, v, w}` records, each undirected edge written exactly once.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RavelError, Result};
use crate::graph::Graph;

/// Display position of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    u: usize,
    v: usize,
    w: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    nodes: Vec<Point>,
    edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// A graph and its per-vertex display positions, kept index-aligned
/// through every mutation
#[derive(Debug, Clone, Default)]
pub struct Document {
    graph: Graph,
    positions: Vec<Point>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Append a vertex placed at `at`, returning its index
    pub fn add_vertex(&mut self, at: Point) -> usize {
        let index = self.graph.add_vertex();
        self.positions.push(at);
        index
    }

    /// Delete a vertex; the remaining positions shift down with the
    /// renumbered indices
    pub fn remove_vertex(&mut self, k: usize) -> Result<()> {
        self.graph.remove_vertex(k)?;
        self.positions.remove(k);
        Ok(())
    }

    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) -> Result<()> {
        self.graph.add_edge(u, v, w)
    }

    pub fn remove_edge(&mut self, u: usize, v: usize, w: f64) -> Result<bool> {
        self.graph.remove_edge(u, v, w)
    }

    /// Read a document from `path`
    ///
    /// Structural problems (unreadable JSON, missing or mistyped fields)
    /// fail with [`RavelError::MalformedGraphFile`]. Edge records that fail
    /// graph validation - out-of-range endpoints, self-loops, bad weights -
    /// are skipped, not fatal; the rest of the file still loads.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RavelError::GraphFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let file: GraphFile =
            serde_json::from_str(&raw).map_err(|e| RavelError::MalformedGraphFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut doc = Document::new();
        for node in file.nodes {
            doc.add_vertex(node);
        }
        let mut skipped = 0usize;
        for record in file.edges {
            if let Err(err) = doc.add_edge(record.u, record.v, record.w) {
                tracing::debug!(u = record.u, v = record.v, w = record.w, %err, "skipping edge record");
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "ignored invalid edge records");
        }
        Ok(doc)
    }

    /// Write the document to `path`, stamping `saved_at`
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = GraphFile {
            nodes: self.positions.clone(),
            edges: self
                .graph
                .edges()
                .map(|(u, v, w)| EdgeRecord {
                    u: u.min(v),
                    v: u.max(v),
                    w,
                })
                .collect(),
            saved_at: Some(Utc::now()),
        };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}
