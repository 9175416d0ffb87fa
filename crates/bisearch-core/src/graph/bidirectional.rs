mod path;

use crate::error::{BisearchError, Result};
use crate::graph::algos::dijkstra::bidirectional_dijkstra;
use crate::graph::frontier::{Frontier, Side};
use crate::graph::types::{
    EndpointPolicy, FoundPath, NodeId, SearchOptions, SearchOutcome, SearchReport, SearchTrace,
    Strategy,
};
use crate::graph::GraphProvider;

pub use path::stitch;

pub(crate) const TRUNCATION_MAX_EXPANSIONS: &str = "max_expansions";

pub(crate) fn budget_spent(expansions: usize, max_expansions: Option<usize>) -> bool {
    max_expansions.is_some_and(|max| expansions >= max)
}

/// Grow both frontiers in strict alternation until one discovers a node the
/// other already holds, or either queue runs dry.
fn breadth_search<N, P>(
    provider: &P,
    start: &N,
    goal: &N,
    max_expansions: Option<usize>,
) -> (SearchOutcome<N>, SearchTrace<N>)
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    let mut forward = Frontier::rooted(Side::Forward, start.clone());
    let mut backward = Frontier::rooted(Side::Backward, goal.clone());
    let mut trace = SearchTrace::default();

    'search: while !forward.is_exhausted() && !backward.is_exhausted() {
        // Forward always moves first; a meeting found forward skips the
        // backward step of the same round.
        for side in [Side::Forward, Side::Backward] {
            if budget_spent(trace.expansions, max_expansions) {
                trace.truncated = true;
                trace.truncation_reason = Some(TRUNCATION_MAX_EXPANSIONS.to_string());
                break 'search;
            }

            let (active, other) = match side {
                Side::Forward => (&mut forward, &backward),
                Side::Backward => (&mut backward, &forward),
            };
            let Some(current) = active.pop() else {
                break 'search;
            };
            trace.expansions += 1;

            if let Some(meeting) = active.expand(&current, provider, other) {
                tracing::debug!(side = active.side().as_str(), meeting = ?meeting, "frontiers_met");
                trace.meeting = Some(meeting);
                break 'search;
            }
        }
    }

    let outcome = match &trace.meeting {
        Some(meeting) => {
            let nodes = stitch(meeting, &forward, &backward);
            SearchOutcome::Found(FoundPath::priced(nodes, provider))
        }
        None => SearchOutcome::NotFound,
    };

    trace.forward = forward.into_discovered();
    trace.backward = backward.into_discovered();
    (outcome, trace)
}

/// Find a path between `start` and `goal` by bidirectional breadth-first search.
///
/// Cost is the hop count of the returned path. Nodes absent from the graph
/// have no neighbors, so a missing endpoint simply yields
/// [`SearchOutcome::NotFound`]. `start == goal` returns `[start]` with cost 0
/// without expanding anything.
pub fn search<N, P>(provider: &P, start: &N, goal: &N) -> SearchOutcome<N>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    if start == goal {
        return identity(start);
    }
    breadth_search(provider, start, goal, None).0
}

fn identity<N: NodeId>(node: &N) -> SearchOutcome<N> {
    SearchOutcome::Found(FoundPath {
        nodes: vec![node.clone()],
        hops: 0,
        total_weight: crate::graph::Weight::ZERO,
    })
}

/// Find a path between two nodes using the configured strategy
///
/// With `Strategy::Breadth`: alternating bidirectional BFS (hop-count cost)
/// With `Strategy::Weighted`: bidirectional Dijkstra (total-weight cost)
#[tracing::instrument(skip(provider, start, goal, opts), fields(start = ?start, goal = ?goal, strategy = %opts.strategy, endpoints = ?opts.endpoints, max_expansions = ?opts.max_expansions))]
pub fn find_path<N, P>(
    provider: &P,
    start: &N,
    goal: &N,
    opts: &SearchOptions,
) -> Result<SearchReport<N>>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    let report = |outcome, trace| SearchReport {
        from: start.clone(),
        to: goal.clone(),
        strategy: opts.strategy,
        outcome,
        trace,
    };

    if start == goal {
        let trace = SearchTrace {
            forward: vec![start.clone()],
            backward: vec![goal.clone()],
            meeting: Some(start.clone()),
            ..SearchTrace::default()
        };
        return Ok(report(identity(start), trace));
    }

    if opts.endpoints == EndpointPolicy::Strict {
        for endpoint in [start, goal] {
            if !provider.contains(endpoint) {
                return Err(BisearchError::unknown_node(endpoint));
            }
        }
    }

    let (outcome, trace) = match opts.strategy {
        Strategy::Breadth => breadth_search(provider, start, goal, opts.max_expansions),
        Strategy::Weighted => bidirectional_dijkstra(provider, start, goal, opts.max_expansions)?,
    };

    tracing::debug!(
        found = outcome.is_found(),
        hops = ?outcome.cost(),
        expansions = trace.expansions,
        truncated = trace.truncated,
        "search_complete"
    );

    Ok(report(outcome, trace))
}
