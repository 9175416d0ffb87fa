use serde::Serialize;

use bisearch_core::error::Result;
use bisearch_core::graph::{Graph, SearchReport, SearchTrace, Strategy, Weight};

use super::hops;

#[derive(Serialize)]
struct HopJson<'a> {
    from: &'a str,
    to: &'a str,
    weight: Weight,
}

#[derive(Serialize)]
struct PathJson<'a> {
    from: &'a str,
    to: &'a str,
    strategy: Strategy,
    found: bool,
    path: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_weight: Option<Weight>,
    edges: Vec<HopJson<'a>>,
    truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a SearchTrace<String>>,
}

/// Render a search report as pretty-printed JSON
pub fn render(
    graph: &Graph<String>,
    report: &SearchReport<String>,
    show_trace: bool,
) -> Result<String> {
    let found = report.outcome.found();
    let output = PathJson {
        from: &report.from,
        to: &report.to,
        strategy: report.strategy,
        found: found.is_some(),
        path: report
            .outcome
            .path()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect(),
        hops: found.map(|f| f.hops),
        total_weight: found.map(|f| f.total_weight),
        edges: hops(graph, report)
            .into_iter()
            .map(|hop| HopJson {
                from: hop.from,
                to: hop.to,
                weight: hop.weight,
            })
            .collect(),
        truncated: report.trace.truncated,
        trace: show_trace.then_some(&report.trace),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
