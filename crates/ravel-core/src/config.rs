//! Workspace configuration
//!
//! An optional `ravel.toml` in the working directory supplies defaults for
//! the graph file path and the output format. CLI flags take precedence over
//! the config file; a missing file means built-in defaults.
//!
//! ```toml
//! [graph]
//! path = "demo.json"
//!
//! [output]
//! format = "records"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RavelError, Result};
use crate::format::OutputFormat;

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "ravel.toml";

/// Graph file used when neither `--graph` nor the config names one
pub const DEFAULT_GRAPH_FILE: &str = "graph.json";

/// Ravel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph file settings
    #[serde(default)]
    pub graph: GraphSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSection {
    /// Graph file used when `--graph` is not given
    #[serde(default = "default_graph_path")]
    pub path: String,
}

impl Default for GraphSection {
    fn default() -> Self {
        GraphSection {
            path: default_graph_path(),
        }
    }
}

fn default_graph_path() -> String {
    DEFAULT_GRAPH_FILE.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load `ravel.toml` from `dir`, falling back to defaults when missing
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| RavelError::InvalidConfig {
            path,
            reason: e.to_string(),
        })
    }
}
