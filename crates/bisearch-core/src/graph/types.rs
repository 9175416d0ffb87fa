use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::BisearchError;

/// Bounds every node identifier type must satisfy.
///
/// Identifiers are opaque tokens: the search only clones, hashes and
/// compares them. `Debug` is required so ids can appear in traces and errors.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeId for T {}

/// Weight carried on a single edge
///
/// The breadth strategy carries weights for reporting only; the weighted
/// strategy orders expansion by them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const UNIT: Weight = Weight(1.0);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the weight can be used to order a shortest-path search
    pub fn is_orderable(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

impl From<i32> for Weight {
    fn from(weight: i32) -> Self {
        Weight(f64::from(weight))
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One outgoing adjacency entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N> {
    pub to: N,
    pub weight: Weight,
}

/// Weighted graph as an adjacency map
///
/// Each node owns an ordered list of outgoing edges. The order in which
/// edges were added is the order in which a search visits them. Nodes are
/// also remembered in insertion order so that listings are deterministic.
/// Inbound edges are kept in a reverse index filled by `add_edge`.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    adjacency: HashMap<N, Vec<Edge<N>>>,
    /// Target -> `(source, weight)` entries, in edge insertion order
    reverse: HashMap<N, Vec<Edge<N>>>,
    order: Vec<N>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            reverse: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no edges; a no-op if it is already present
    pub fn add_node(&mut self, id: N) {
        if !self.adjacency.contains_key(&id) {
            self.order.push(id.clone());
            self.adjacency.insert(id, Vec::new());
        }
    }

    /// Append a directed edge `from -> to`; `to` is registered as a node too
    pub fn add_edge(&mut self, from: N, to: N, weight: impl Into<Weight>) {
        let weight = weight.into();
        self.add_node(from.clone());
        self.add_node(to.clone());
        self.reverse.entry(to.clone()).or_default().push(Edge {
            to: from.clone(),
            weight,
        });
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge { to, weight });
        }
    }

    /// Append `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: impl Into<Weight>) {
        let weight = weight.into();
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn contains(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Outgoing edges of `id`; an unknown node has none
    pub fn edges(&self, id: &N) -> &[Edge<N>] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges pointing at `id`, each reported as `(source, weight)`
    pub fn inbound(&self, id: &N) -> &[Edge<N>] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Smallest weight among edges joining `a` and `b` in either direction
    pub fn weight_between(&self, a: &N, b: &N) -> Option<Weight> {
        let forward = self.edges(a).iter().filter(|e| &e.to == b);
        let backward = self.edges(b).iter().filter(|e| &e.to == a);
        forward
            .chain(backward)
            .map(|e| e.weight)
            .reduce(|best, w| if w < best { w } else { best })
    }

    /// Build a graph from `(node, [(neighbor, weight), ...])` lists
    pub fn from_adjacency<I, E, W>(lists: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
        W: Into<Weight>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in lists {
            graph.add_node(node.clone());
            for (neighbor, weight) in neighbors {
                graph.add_edge(node.clone(), neighbor, weight);
            }
        }
        graph
    }
}

/// How expansion is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Alternating FIFO expansion; cost is the hop count
    #[default]
    Breadth,
    /// Bidirectional Dijkstra; cost is the total edge weight
    Weighted,
}

pub const STRATEGY_BREADTH: &str = "breadth";
pub const STRATEGY_WEIGHTED: &str = "weighted";

impl FromStr for Strategy {
    type Err = BisearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            STRATEGY_BREADTH | "bfs" => Ok(Strategy::Breadth),
            STRATEGY_WEIGHTED | "dijkstra" => Ok(Strategy::Weighted),
            other => Err(BisearchError::unsupported(
                "strategy",
                other,
                "breadth, weighted",
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Breadth => write!(f, "{}", STRATEGY_BREADTH),
            Strategy::Weighted => write!(f, "{}", STRATEGY_WEIGHTED),
        }
    }
}

/// What to do when the start or goal is not a key of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointPolicy {
    /// Missing endpoints expand to zero neighbors, yielding "no path"
    #[default]
    Lenient,
    /// Missing endpoints are reported as [`BisearchError::UnknownNode`]
    Strict,
}

impl FromStr for EndpointPolicy {
    type Err = BisearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(EndpointPolicy::Lenient),
            "strict" => Ok(EndpointPolicy::Strict),
            other => Err(BisearchError::unsupported(
                "endpoint policy",
                other,
                "lenient, strict",
            )),
        }
    }
}

/// Options for [`crate::graph::find_path`]
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub strategy: Strategy,
    pub endpoints: EndpointPolicy,
    /// Stop after this many node expansions (both directions combined)
    pub max_expansions: Option<usize>,
}

/// A path found between start and goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundPath<N> {
    /// Nodes from start to goal, meeting node included once
    pub nodes: Vec<N>,
    /// Number of edges in `nodes`
    pub hops: usize,
    /// Sum of the weights of the traversed edges
    pub total_weight: Weight,
}

impl<N: NodeId> FoundPath<N> {
    /// Build a path from its node sequence, pricing each hop against `graph`
    pub(crate) fn priced<P>(nodes: Vec<N>, provider: &P) -> Self
    where
        P: super::GraphProvider<N> + ?Sized,
    {
        let total_weight = nodes
            .windows(2)
            .filter_map(|pair| provider.weight_between(&pair[0], &pair[1]))
            .sum();
        Self {
            hops: nodes.len().saturating_sub(1),
            nodes,
            total_weight,
        }
    }
}

/// Result of a search: a path or the explicit absence of one
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<N> {
    Found(FoundPath<N>),
    NotFound,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The path from start to goal, if one was found
    pub fn path(&self) -> Option<&[N]> {
        match self {
            SearchOutcome::Found(found) => Some(&found.nodes),
            SearchOutcome::NotFound => None,
        }
    }

    /// Hop count of the path, if one was found
    pub fn cost(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(found) => Some(found.hops),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn found(&self) -> Option<&FoundPath<N>> {
        match self {
            SearchOutcome::Found(found) => Some(found),
            SearchOutcome::NotFound => None,
        }
    }
}

/// What each frontier discovered, in order, and why the search stopped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTrace<N> {
    pub forward: Vec<N>,
    pub backward: Vec<N>,
    pub meeting: Option<N>,
    pub expansions: usize,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

impl<N> Default for SearchTrace<N> {
    fn default() -> Self {
        Self {
            forward: Vec::new(),
            backward: Vec::new(),
            meeting: None,
            expansions: 0,
            truncated: false,
            truncation_reason: None,
        }
    }
}

/// Full result of [`crate::graph::find_path`]
#[derive(Debug, Clone)]
pub struct SearchReport<N> {
    pub from: N,
    pub to: N,
    pub strategy: Strategy,
    pub outcome: SearchOutcome<N>,
    pub trace: SearchTrace<N>,
}
