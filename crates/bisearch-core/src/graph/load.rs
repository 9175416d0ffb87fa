//! Loading graph documents from disk
//!
//! A graph document can be written in JSON, TOML or YAML; the format is
//! chosen by file extension. All three share one shape:
//!
//! ```toml
//! undirected = true        # mirror every [[edges]] entry
//! nodes = ["X"]            # isolated nodes
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 1               # optional, defaults to 1
//!
//! [adjacency]              # ordered neighbor lists, taken as given
//! C = [["A", 4], ["F", 3], "G"]
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bail_unsupported;
use crate::error::{BisearchError, Result};
use crate::graph::types::{Graph, Weight};

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(GraphFormat::Json),
            "toml" => Ok(GraphFormat::Toml),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            other => bail_unsupported!("graph file extension", other, "json, toml, yaml, yml"),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Toml => write!(f, "toml"),
            GraphFormat::Yaml => write!(f, "yaml"),
        }
    }
}

fn default_weight() -> f64 {
    Weight::UNIT.value()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    from: String,
    to: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NeighborSpec {
    Bare(String),
    Pair(String, f64),
    Table {
        to: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

impl NeighborSpec {
    fn into_parts(self) -> (String, f64) {
        match self {
            NeighborSpec::Bare(to) => (to, default_weight()),
            NeighborSpec::Pair(to, weight) | NeighborSpec::Table { to, weight } => (to, weight),
        }
    }
}

/// On-disk shape of a graph
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    undirected: bool,
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    adjacency: BTreeMap<String, Vec<NeighborSpec>>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

fn check_id(path: &Path, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(BisearchError::invalid_graph(path, "empty node id"));
    }
    Ok(())
}

fn check_weight(path: &Path, from: &str, to: &str, weight: f64) -> Result<Weight> {
    if !weight.is_finite() {
        return Err(BisearchError::invalid_graph(
            path,
            format!("non-finite weight on edge {} -> {}", from, to),
        ));
    }
    Ok(Weight::new(weight))
}

impl GraphDocument {
    fn into_graph(self, path: &Path) -> Result<Graph<String>> {
        let mut graph = Graph::new();

        for id in self.nodes {
            check_id(path, &id)?;
            graph.add_node(id);
        }

        for (from, neighbors) in self.adjacency {
            check_id(path, &from)?;
            graph.add_node(from.clone());
            for neighbor in neighbors {
                let (to, weight) = neighbor.into_parts();
                check_id(path, &to)?;
                let weight = check_weight(path, &from, &to, weight)?;
                graph.add_edge(from.clone(), to, weight);
            }
        }

        for edge in self.edges {
            check_id(path, &edge.from)?;
            check_id(path, &edge.to)?;
            let weight = check_weight(path, &edge.from, &edge.to, edge.weight)?;
            if self.undirected {
                graph.add_undirected_edge(edge.from, edge.to, weight);
            } else {
                graph.add_edge(edge.from, edge.to, weight);
            }
        }

        Ok(graph)
    }
}

/// Parse a graph document already read into memory.
///
/// `path` is used for error messages only.
pub fn parse_graph(content: &str, format: GraphFormat, path: &Path) -> Result<Graph<String>> {
    let document: GraphDocument = match format {
        GraphFormat::Json => {
            serde_json::from_str(content).map_err(|e| BisearchError::invalid_graph(path, e))?
        }
        GraphFormat::Toml => {
            toml::from_str(content).map_err(|e| BisearchError::invalid_graph(path, e))?
        }
        GraphFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| BisearchError::invalid_graph(path, e))?
        }
    };
    document.into_graph(path)
}

/// Load a graph document from disk
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    if !path.is_file() {
        return Err(BisearchError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = GraphFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let graph = parse_graph(&content, format, path)?;
    tracing::debug!(
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}
