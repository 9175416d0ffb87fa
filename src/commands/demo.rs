//! `bisearch demo`: search the built-in sample graph

use bisearch_core::error::Result;
use bisearch_core::graph::sample::sample_graph;

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;

/// Execute the demo command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, args: &SearchArgs) -> Result<()> {
    let graph = sample_graph();
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "sample_graph"
    );
    super::path::search_and_output(ctx, &graph, from, to, args)
}
