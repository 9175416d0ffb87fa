//! `bisearch check`: report structural issues in a graph document

use std::path::Path;
use std::time::Instant;

use bisearch_core::error::Result;
use bisearch_core::graph::check::{check_graph, GraphCheck, GraphIssue};
use bisearch_core::graph::load::load_graph;
use bisearch_core::records::record_id;
use bisearch_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

fn describe(issue: &GraphIssue<String>) -> String {
    match issue {
        GraphIssue::AsymmetricEdge { from, to } => {
            format!("asymmetric edge {} -> {} (no {} -> {})", from, to, to, from)
        }
        GraphIssue::NegativeWeight { from, to, weight } => {
            format!("negative weight {} on edge {} -> {}", weight, from, to)
        }
        GraphIssue::SelfLoop { node } => format!("self loop on {}", node),
        GraphIssue::IsolatedNode { node } => format!("isolated node {}", node),
    }
}

fn record(issue: &GraphIssue<String>) -> String {
    match issue {
        GraphIssue::AsymmetricEdge { from, to } => {
            format!("I asymmetric_edge {} {}", record_id(from), record_id(to))
        }
        GraphIssue::NegativeWeight { from, to, weight } => format!(
            "I negative_weight {} {} {}",
            record_id(from),
            record_id(to),
            weight
        ),
        GraphIssue::SelfLoop { node } => format!("I self_loop {}", record_id(node)),
        GraphIssue::IsolatedNode { node } => format!("I isolated_node {}", record_id(node)),
    }
}

pub fn render_human(check: &GraphCheck<String>, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if !quiet {
        lines.push(format!(
            "Graph: {} nodes, {} edges, {} component{}",
            check.nodes,
            check.edges,
            check.components,
            if check.components == 1 { "" } else { "s" }
        ));
        lines.push(format!(
            "Symmetric: {}",
            if check.symmetric { "yes" } else { "no" }
        ));
    }
    if check.is_clean() {
        if !quiet {
            lines.push("No issues found".to_string());
        }
    } else {
        lines.extend(check.issues.iter().map(|issue| format!("- {}", describe(issue))));
    }
    lines
}

pub fn render_records(check: &GraphCheck<String>) -> Vec<String> {
    let mut lines = vec![format!(
        "H bisearch=1 records=1 mode=check nodes={} edges={} components={} symmetric={} issues={}",
        check.nodes,
        check.edges,
        check.components,
        check.symmetric,
        check.issues.len()
    )];
    lines.extend(check.issues.iter().map(record));
    lines
}

/// Execute the check command
pub fn execute(ctx: &CommandContext, graph_path: &Path) -> Result<()> {
    let start = Instant::now();
    let graph = load_graph(graph_path)?;
    let check = check_graph(&graph);
    trace_time!(start, "check_graph", issues = check.issues.len());

    match ctx.format() {
        OutputFormat::Human => {
            for line in render_human(&check, ctx.cli.quiet) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        OutputFormat::Records => {
            for line in render_records(&check) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
