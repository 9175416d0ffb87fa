//! One side of a bidirectional search.
//!
//! A frontier owns its FIFO queue, the predecessor of every node it has
//! discovered, and the order of discovery. Its root maps to `None`.

use std::collections::{HashMap, VecDeque};

use crate::graph::types::NodeId;
use crate::graph::GraphProvider;

/// Which end of the path a frontier grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Forward,
    Backward,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Forward => "forward",
            Side::Backward => "backward",
        }
    }
}

/// Breadth-first frontier with predecessor tracking
#[derive(Debug, Clone)]
pub struct Frontier<N: NodeId> {
    side: Side,
    queue: VecDeque<N>,
    predecessors: HashMap<N, Option<N>>,
    discovered: Vec<N>,
}

impl<N: NodeId> Frontier<N> {
    /// Create a frontier whose queue and visited set hold only `root`
    pub fn rooted(side: Side, root: N) -> Self {
        let mut predecessors = HashMap::new();
        predecessors.insert(root.clone(), None);
        Self {
            side,
            queue: VecDeque::from([root.clone()]),
            predecessors,
            discovered: vec![root],
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Remove the node at the head of the queue
    pub fn pop(&mut self) -> Option<N> {
        self.queue.pop_front()
    }

    /// Record `node` as discovered from `from` and enqueue it.
    ///
    /// Returns `false` without changing anything if `node` was already
    /// discovered by this frontier.
    pub fn push(&mut self, node: N, from: N) -> bool {
        if self.predecessors.contains_key(&node) {
            return false;
        }
        self.predecessors.insert(node.clone(), Some(from));
        self.discovered.push(node.clone());
        self.queue.push_back(node);
        true
    }

    /// Whether this frontier has discovered `node`
    pub fn contains(&self, node: &N) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Predecessor of `node` in this frontier's direction.
    ///
    /// `None` for the root and for nodes this frontier never discovered.
    pub fn predecessor_of(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(Option::as_ref)
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Nodes in the order this frontier discovered them, root first
    pub fn discovered(&self) -> &[N] {
        &self.discovered
    }

    pub fn into_discovered(self) -> Vec<N> {
        self.discovered
    }

    /// Expand `node`: discover its unseen outgoing neighbors in adjacency
    /// order, stopping at the first one `other` has already discovered.
    ///
    /// Returns that meeting node, if any.
    pub fn expand<P>(&mut self, node: &N, provider: &P, other: &Frontier<N>) -> Option<N>
    where
        P: GraphProvider<N> + ?Sized,
    {
        for edge in provider.outbound_edges(node) {
            if !self.push(edge.to.clone(), node.clone()) {
                continue;
            }
            tracing::trace!(side = self.side.as_str(), from = ?node, to = ?edge.to, "discover");
            if other.contains(&edge.to) {
                return Some(edge.to);
            }
        }
        None
    }

    /// Walk predecessors from `node` back to the root, `node` first
    pub fn chain_from(&self, node: &N) -> Vec<N> {
        let mut chain = vec![node.clone()];
        let mut current = node;
        while let Some(pred) = self.predecessor_of(current) {
            chain.push(pred.clone());
            current = pred;
        }
        chain
    }
}
