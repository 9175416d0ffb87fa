use bisearch_core::graph::{Graph, SearchReport};
use bisearch_core::records::{record_id, record_ids};

use super::hops;

/// Render a search report as line-oriented records
///
/// ```text
/// H bisearch=1 records=1 mode=path from=A to=F strategy=breadth found=true hops=2 weight=7 truncated=false
/// N A
/// E A C 4
/// T forward A B C
/// ```
pub fn render(graph: &Graph<String>, report: &SearchReport<String>, show_trace: bool) -> Vec<String> {
    let mut header = format!(
        "H bisearch=1 records=1 mode=path from={} to={} strategy={} found={}",
        record_id(&report.from),
        record_id(&report.to),
        report.strategy,
        report.outcome.is_found()
    );
    if let Some(found) = report.outcome.found() {
        header.push_str(&format!(" hops={} weight={}", found.hops, found.total_weight));
    }
    header.push_str(&format!(" truncated={}", report.trace.truncated));

    let mut lines = vec![header];
    for node in report.outcome.path().unwrap_or_default() {
        lines.push(format!("N {}", record_id(node)));
    }
    for hop in hops(graph, report) {
        lines.push(format!(
            "E {} {} {}",
            record_id(hop.from),
            record_id(hop.to),
            hop.weight
        ));
    }

    if show_trace {
        let trace = &report.trace;
        lines.push(format!("T forward {}", record_ids(&trace.forward)));
        lines.push(format!("T backward {}", record_ids(&trace.backward)));
        if let Some(meeting) = &trace.meeting {
            lines.push(format!("T meeting {}", record_id(meeting)));
        }
        lines.push(format!("T expansions {}", trace.expansions));
    }

    lines
}
