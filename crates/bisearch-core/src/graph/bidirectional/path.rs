//! Path reconstruction for bidirectional search

use crate::graph::frontier::Frontier;
use crate::graph::types::NodeId;

/// Stitch the two predecessor chains at `meeting` into one start-to-goal path.
///
/// The forward chain is walked from `meeting` back to the start and
/// reversed; the backward chain then continues from `meeting` to the goal.
/// `meeting` appears exactly once.
pub fn stitch<N: NodeId>(meeting: &N, forward: &Frontier<N>, backward: &Frontier<N>) -> Vec<N> {
    let mut path = forward.chain_from(meeting);
    path.reverse();
    path.extend(backward.chain_from(meeting).into_iter().skip(1));
    path
}
