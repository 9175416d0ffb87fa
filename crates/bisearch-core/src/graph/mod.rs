//! Graph model and path-finding operations
//!
//! Provides the searches used to connect two nodes:
//! - Bidirectional BFS with alternating frontiers (hop-count cost)
//! - Bidirectional Dijkstra for weighted shortest paths
//! - Graph provider trait for pluggable adjacency sources
//! - Loading and structural checks for graph documents

pub mod algos;
pub mod bidirectional;
pub mod check;
pub mod frontier;
pub mod load;
pub mod provider;
pub mod sample;
pub mod types;

pub use bidirectional::{find_path, search};
pub use frontier::{Frontier, Side};
pub use provider::GraphProvider;
pub use types::{
    Edge, EndpointPolicy, FoundPath, Graph, NodeId, SearchOptions, SearchOutcome, SearchReport,
    SearchTrace, Strategy, Weight,
};
