use crate::graph::types::{Edge, Graph, NodeId, Weight};

/// Trait for providing graph adjacency to the searches
pub trait GraphProvider<N: NodeId> {
    /// Whether `id` is a key of the graph
    fn contains(&self, id: &N) -> bool;

    /// Outgoing `(neighbor, weight)` entries of `id`, in adjacency order.
    /// Unknown nodes have no outgoing edges.
    fn outbound_edges(&self, id: &N) -> Vec<Edge<N>>;

    /// Edges pointing at `id`, each reported as `(source, weight)`
    fn inbound_edges(&self, id: &N) -> Vec<Edge<N>>;

    /// Smallest weight among edges joining `a` and `b` in either direction
    fn weight_between(&self, a: &N, b: &N) -> Option<Weight>;
}

impl<N: NodeId> GraphProvider<N> for Graph<N> {
    fn contains(&self, id: &N) -> bool {
        Graph::contains(self, id)
    }

    fn outbound_edges(&self, id: &N) -> Vec<Edge<N>> {
        self.edges(id).to_vec()
    }

    fn inbound_edges(&self, id: &N) -> Vec<Edge<N>> {
        self.inbound(id).to_vec()
    }

    fn weight_between(&self, a: &N, b: &N) -> Option<Weight> {
        Graph::weight_between(self, a, b)
    }
}
