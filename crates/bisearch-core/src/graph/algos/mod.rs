//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted bidirectional shortest path

pub mod dijkstra;

pub use dijkstra::bidirectional_dijkstra;
