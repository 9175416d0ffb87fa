use crate::error::{BisearchError, Result};
use crate::graph::bidirectional::{budget_spent, TRUNCATION_MAX_EXPANSIONS};
use crate::graph::frontier::Side;
use crate::graph::types::{Edge, FoundPath, NodeId, SearchOutcome, SearchTrace, Weight};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
///
/// Entries with equal cost pop in push order.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node_id: N,
    pub accumulated_cost: Weight,
    seq: u64,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked for one direction of the weighted search
struct DijkstraState<N: NodeId> {
    side: Side,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    best_costs: HashMap<N, Weight>,
    predecessors: HashMap<N, Option<N>>,
    settled: HashSet<N>,
    discovered: Vec<N>,
    next_seq: u64,
}

impl<N: NodeId> DijkstraState<N> {
    fn rooted(side: Side, root: &N) -> Self {
        let mut state = Self {
            side,
            heap: BinaryHeap::new(),
            best_costs: HashMap::new(),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            discovered: Vec::new(),
            next_seq: 0,
        };
        state.improve(root.clone(), None, Weight::ZERO);
        state
    }

    /// Cost of the cheapest entry still queued
    fn peek_cost(&self) -> Option<Weight> {
        self.heap
            .peek()
            .map(|Reverse(entry)| entry.accumulated_cost)
    }

    /// Record a cheaper way to reach `node` and queue it
    fn improve(&mut self, node: N, pred: Option<N>, cost: Weight) {
        if !self.best_costs.contains_key(&node) {
            self.discovered.push(node.clone());
        }
        self.best_costs.insert(node.clone(), cost);
        self.predecessors.insert(node.clone(), pred);
        self.heap.push(Reverse(HeapEntry {
            node_id: node,
            accumulated_cost: cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Pop the next unsettled node whose entry is not stale
    fn settle_next(&mut self) -> Option<(N, Weight)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled.contains(&entry.node_id) {
                continue;
            }
            let current = self.best_costs.get(&entry.node_id).copied();
            if current.is_some_and(|best| entry.accumulated_cost > best) {
                continue;
            }
            self.settled.insert(entry.node_id.clone());
            return Some((entry.node_id, entry.accumulated_cost));
        }
        None
    }

    fn edges<P>(&self, provider: &P, node: &N) -> Vec<Edge<N>>
    where
        P: GraphProvider<N> + ?Sized,
    {
        match self.side {
            Side::Forward => provider.outbound_edges(node),
            Side::Backward => provider.inbound_edges(node),
        }
    }

    /// Walk predecessors from `node` back to the root, `node` first
    fn chain_from(&self, node: &N) -> Vec<N> {
        let mut chain = vec![node.clone()];
        let mut current = node;
        while let Some(Some(pred)) = self.predecessors.get(current) {
            chain.push(pred.clone());
            current = pred;
        }
        chain
    }
}

/// Best meeting point seen so far
struct Meeting<N> {
    node: N,
    cost: Weight,
}

/// Relax every edge of `node` on `this` side, updating `best` whenever a
/// relaxed node is also known to `other`.
fn relax_edges<N, P>(
    provider: &P,
    node: &N,
    cost: Weight,
    this: &mut DijkstraState<N>,
    other: &DijkstraState<N>,
    best: &mut Option<Meeting<N>>,
) -> Result<()>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    for edge in this.edges(provider, node) {
        if !edge.weight.is_orderable() {
            let (from, to) = match this.side {
                Side::Forward => (node, &edge.to),
                Side::Backward => (&edge.to, node),
            };
            return Err(BisearchError::negative_weight(
                from,
                to,
                edge.weight.value(),
            ));
        }

        let new_cost = cost + edge.weight;
        let improves = this
            .best_costs
            .get(&edge.to)
            .is_none_or(|&existing| new_cost < existing);
        if improves && !this.settled.contains(&edge.to) {
            this.improve(edge.to.clone(), Some(node.clone()), new_cost);
        }

        let (Some(&here), Some(&there)) =
            (this.best_costs.get(&edge.to), other.best_costs.get(&edge.to))
        else {
            continue;
        };
        let candidate = here + there;
        if best.as_ref().is_none_or(|m| candidate < m.cost) {
            tracing::trace!(side = this.side.as_str(), meeting = ?edge.to, cost = candidate.value(), "meeting_candidate");
            *best = Some(Meeting {
                node: edge.to.clone(),
                cost: candidate,
            });
        }
    }
    Ok(())
}

/// Bidirectional Dijkstra between `start` and `goal`
///
/// The forward side relaxes outbound edges and the backward side relaxes
/// inbound edges, so directed graphs are searched correctly. Each round
/// settles one node on the side with the cheaper queue head (forward on
/// ties). The search stops once the two queue heads together cost at least
/// as much as the best meeting found. Reported cost is the total weight.
///
/// Fails with [`BisearchError::NegativeWeight`] on the first negative or
/// non-finite weight it relaxes.
pub fn bidirectional_dijkstra<N, P>(
    provider: &P,
    start: &N,
    goal: &N,
    max_expansions: Option<usize>,
) -> Result<(SearchOutcome<N>, SearchTrace<N>)>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    let mut forward = DijkstraState::rooted(Side::Forward, start);
    let mut backward = DijkstraState::rooted(Side::Backward, goal);
    let mut trace = SearchTrace::default();
    let mut best = (start == goal).then(|| Meeting {
        node: start.clone(),
        cost: Weight::ZERO,
    });

    while let (Some(top_f), Some(top_b)) = (forward.peek_cost(), backward.peek_cost()) {
        if best.as_ref().is_some_and(|m| top_f + top_b >= m.cost) {
            break;
        }
        if budget_spent(trace.expansions, max_expansions) {
            trace.truncated = true;
            trace.truncation_reason = Some(TRUNCATION_MAX_EXPANSIONS.to_string());
            break;
        }

        let (this, other) = if top_f <= top_b {
            (&mut forward, &backward)
        } else {
            (&mut backward, &forward)
        };
        let Some((node, cost)) = this.settle_next() else {
            continue;
        };
        trace.expansions += 1;
        relax_edges(provider, &node, cost, this, other, &mut best)?;
    }

    // A truncated search may hold a meeting that is not yet proven optimal
    let outcome = match best {
        Some(meeting) if !trace.truncated => {
            let mut nodes = forward.chain_from(&meeting.node);
            nodes.reverse();
            nodes.extend(backward.chain_from(&meeting.node).into_iter().skip(1));
            tracing::debug!(meeting = ?meeting.node, cost = meeting.cost.value(), "frontiers_met");
            trace.meeting = Some(meeting.node);
            SearchOutcome::Found(FoundPath {
                hops: nodes.len() - 1,
                nodes,
                total_weight: meeting.cost,
            })
        }
        _ => SearchOutcome::NotFound,
    };

    trace.forward = forward.discovered;
    trace.backward = backward.discovered;
    Ok((outcome, trace))
}

#[cfg(test)]
mod tests;
