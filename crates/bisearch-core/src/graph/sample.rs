//! Built-in sample graph used by `bisearch demo` and the tests

use crate::graph::types::Graph;

/// Start node of the sample search
pub const SAMPLE_START: &str = "A";
/// Goal node of the sample search
pub const SAMPLE_GOAL: &str = "F";

/// Six-node undirected graph with symmetric adjacency lists:
///
/// ```text
/// A: B(1) C(4)
/// B: A(1) D(2) E(6)
/// C: A(4) F(3)
/// D: B(2)
/// E: B(6) F(2)
/// F: C(3) E(2)
/// ```
pub fn sample_graph() -> Graph<String> {
    let lists = [
        ("A", vec![("B", 1), ("C", 4)]),
        ("B", vec![("A", 1), ("D", 2), ("E", 6)]),
        ("C", vec![("A", 4), ("F", 3)]),
        ("D", vec![("B", 2)]),
        ("E", vec![("B", 6), ("F", 2)]),
        ("F", vec![("C", 3), ("E", 2)]),
    ];
    Graph::from_adjacency(lists.into_iter().map(|(node, neighbors)| {
        (
            node.to_string(),
            neighbors
                .into_iter()
                .map(|(to, weight)| (to.to_string(), weight)),
        )
    }))
}
