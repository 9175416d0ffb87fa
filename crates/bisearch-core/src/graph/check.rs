//! Structural checks for loaded graphs
//!
//! None of these conditions stop a breadth search; they explain results
//! that would otherwise be surprising (an asymmetric edge makes a path
//! one-way, a negative weight fails the weighted strategy).

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::graph::types::{Graph, NodeId};

/// A single finding about a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphIssue<N> {
    /// `from -> to` exists but `to -> from` does not
    AsymmetricEdge { from: N, to: N },
    /// Edge whose weight cannot be used by the weighted strategy
    NegativeWeight { from: N, to: N, weight: f64 },
    /// Edge from a node to itself
    SelfLoop { node: N },
    /// Node with no outgoing or incoming edges
    IsolatedNode { node: N },
}

/// Summary produced by [`check_graph`]
#[derive(Debug, Clone, Serialize)]
pub struct GraphCheck<N> {
    pub nodes: usize,
    pub edges: usize,
    /// Connected components, treating every edge as undirected
    pub components: usize,
    /// Whether every edge has a mirror edge
    pub symmetric: bool,
    pub issues: Vec<GraphIssue<N>>,
}

impl<N> GraphCheck<N> {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn count_components<N: NodeId>(graph: &Graph<N>) -> usize {
    let mut seen: HashSet<N> = HashSet::new();
    let mut components = 0;

    for root in graph.nodes() {
        if !seen.insert(root.clone()) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(current) = queue.pop_front() {
            let outbound = graph.edges(&current).iter().map(|e| e.to.clone());
            let inbound = graph.inbound(&current).iter().map(|e| e.to.clone());
            for next in outbound.chain(inbound) {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
    }
    components
}

/// Inspect `graph` and report anything a caller may want to know before
/// searching it. Issues are listed in node insertion order.
pub fn check_graph<N: NodeId>(graph: &Graph<N>) -> GraphCheck<N> {
    let mut issues = Vec::new();
    let mut has_inbound: HashSet<&N> = HashSet::new();
    let mut symmetric = true;

    for from in graph.nodes() {
        for edge in graph.edges(from) {
            has_inbound.insert(&edge.to);
            if &edge.to == from {
                issues.push(GraphIssue::SelfLoop { node: from.clone() });
            } else if !graph.edges(&edge.to).iter().any(|back| &back.to == from) {
                symmetric = false;
                issues.push(GraphIssue::AsymmetricEdge {
                    from: from.clone(),
                    to: edge.to.clone(),
                });
            }
            if !edge.weight.is_orderable() {
                issues.push(GraphIssue::NegativeWeight {
                    from: from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight.value(),
                });
            }
        }
    }

    for node in graph.nodes() {
        if graph.edges(node).is_empty() && !has_inbound.contains(node) {
            issues.push(GraphIssue::IsolatedNode { node: node.clone() });
        }
    }

    GraphCheck {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        components: count_components(graph),
        symmetric,
        issues,
    }
}
