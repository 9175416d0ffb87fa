//! `bisearch path`: find a path between two nodes of a graph document

pub mod human;
pub mod json;
pub mod records;

use std::path::Path;
use std::time::Instant;

use bisearch_core::bail_usage;
use bisearch_core::error::Result;
use bisearch_core::graph::load::load_graph;
use bisearch_core::graph::{find_path, Graph, SearchReport, Weight};
use bisearch_core::trace_time;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;

/// One hop of a found path with the weight it was priced at
#[derive(Debug, Clone, PartialEq)]
pub struct Hop<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub weight: Weight,
}

/// Consecutive node pairs of the found path, if any
pub fn hops<'a>(graph: &Graph<String>, report: &'a SearchReport<String>) -> Vec<Hop<'a>> {
    let Some(nodes) = report.outcome.path() else {
        return Vec::new();
    };
    nodes
        .windows(2)
        .filter_map(|pair| {
            graph.weight_between(&pair[0], &pair[1]).map(|weight| Hop {
                from: &pair[0],
                to: &pair[1],
                weight,
            })
        })
        .collect()
}

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    start: &str,
    goal: &str,
    args: &SearchArgs,
) -> Result<()> {
    if start.trim().is_empty() || goal.trim().is_empty() {
        bail_usage!("start and goal node ids must not be empty");
    }

    let load_start = Instant::now();
    let graph = load_graph(graph_path)?;
    trace_time!(load_start, "load_graph", nodes = graph.node_count());
    trace_command!(ctx.cli, ctx.start, "load_graph");

    search_and_output(ctx, &graph, start, goal, args)
}

/// Run the search on an already loaded graph and print the report
pub fn search_and_output(
    ctx: &CommandContext,
    graph: &Graph<String>,
    start: &str,
    goal: &str,
    args: &SearchArgs,
) -> Result<()> {
    let opts = args.apply(ctx.config.search_options());

    let search_start = Instant::now();
    let report = find_path(graph, &start.to_string(), &goal.to_string(), &opts)?;
    trace_time!(search_start, "find_path", expansions = report.trace.expansions);
    trace_command!(ctx.cli, ctx.start, "execute_command");

    match ctx.format() {
        OutputFormat::Human => {
            for line in human::render(&report, args.trace, ctx.cli.quiet) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", json::render(graph, &report, args.trace)?);
        }
        OutputFormat::Records => {
            for line in records::render(graph, &report, args.trace) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
