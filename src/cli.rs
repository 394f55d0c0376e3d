//! CLI argument parsing for ravel
//!
//! Global flags: --graph, --format, --quiet, --verbose, --log-level,
//! --log-json. Vertex arguments accept a zero-based index (`2`) or a
//! spreadsheet-style label (`C`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use ravel_core::format::OutputFormat;

/// Ravel - build weighted graphs and run classical graph algorithms
#[derive(Parser, Debug)]
#[command(name = "ravel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (default from ravel.toml, then graph.json)
    #[arg(long, global = true)]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty graph file
    Init {
        /// Overwrite an existing graph file
        #[arg(long)]
        force: bool,
    },

    /// Add or remove vertices
    Vertex {
        #[command(subcommand)]
        command: VertexCommands,
    },

    /// Add or remove edges
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },

    /// Print the graph: vertices, adjacency, edges
    Show,

    /// Depth-first spanning tree from a start vertex
    Dfs {
        /// Start vertex (index or label)
        start: String,
    },

    /// Breadth-first spanning tree from a start vertex
    Bfs {
        /// Start vertex (index or label)
        start: String,
    },

    /// Shortest path between two vertices (Dijkstra)
    Path {
        /// Source vertex (index or label)
        src: String,
        /// Destination vertex (index or label)
        dest: String,
    },

    /// Minimum spanning tree
    Mst {
        #[command(subcommand)]
        command: MstCommands,
    },
}

/// Vertex subcommands
#[derive(Subcommand, Debug)]
pub enum VertexCommands {
    /// Append a new vertex
    Add {
        /// Canvas x position
        #[arg(long, default_value_t = 0.0)]
        x: f64,

        /// Canvas y position
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },

    /// Delete a vertex and renumber the rest
    Rm {
        /// Vertex to delete (index or label)
        vertex: String,
    },
}

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Connect two vertices with a weighted edge
    Add {
        /// First endpoint (index or label)
        u: String,
        /// Second endpoint (index or label)
        v: String,
        /// Edge weight (non-negative)
        weight: f64,
    },

    /// Remove one edge matching the endpoints and weight
    Rm {
        /// First endpoint (index or label)
        u: String,
        /// Second endpoint (index or label)
        v: String,
        /// Edge weight
        weight: f64,
    },
}

/// MST subcommands
#[derive(Subcommand, Debug)]
pub enum MstCommands {
    /// Grow the tree from a start vertex
    Prim {
        /// Start vertex (index or label)
        start: String,
    },

    /// Sort all edges and join components with a union-find
    Kruskal,
}
