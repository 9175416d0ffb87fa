use bisearch_core::graph::{SearchOutcome, SearchReport, SearchTrace};

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn trace_lines(trace: &SearchTrace<String>) -> Vec<String> {
    let mut lines = vec![
        format!("Forward discovered: {}", trace.forward.join(", ")),
        format!("Backward discovered: {}", trace.backward.join(", ")),
    ];
    if let Some(meeting) = &trace.meeting {
        lines.push(format!("Meeting node: {}", meeting));
    }
    lines.push(format!("Expansions: {}", trace.expansions));
    lines
}

/// Render a search report for the terminal
pub fn render(report: &SearchReport<String>, show_trace: bool, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.outcome {
        SearchOutcome::Found(found) => {
            lines.push(found.nodes.join(" -> "));
            if !quiet {
                lines.push(format!("Path length: {}", plural(found.hops, "hop")));
                lines.push(format!("Total weight: {}", found.total_weight));
            }
        }
        SearchOutcome::NotFound => {
            lines.push(format!("No path found from {} to {}", report.from, report.to));
            if report.trace.truncated && !quiet {
                let reason = report.trace.truncation_reason.as_deref().unwrap_or("limit");
                lines.push(format!(
                    "Search stopped after {} ({})",
                    plural(report.trace.expansions, "expansion"),
                    reason
                ));
            }
        }
    }

    if show_trace && !quiet {
        lines.extend(trace_lines(&report.trace));
    }

    lines
}
