use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the computed log filter
pub const LOG_ENV: &str = "BISEARCH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_graph");
/// // Or with additional fields:
/// trace_time!(start, "load_graph", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Filter directive for the given CLI flags.
///
/// A bare level such as `trace` is scoped to the bisearch crates; anything
/// containing `=` is passed through untouched.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("bisearch={level},bisearch_core={level}"),
        (true, None) => "bisearch=debug,bisearch_core=debug".to_string(),
        (false, None) => "bisearch=warn,bisearch_core=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(verbose, log_level);

    // BISEARCH_LOG wins over the flags
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_defaults() {
        assert_eq!(
            filter_directive(false, None),
            "bisearch=warn,bisearch_core=warn"
        );
        assert_eq!(
            filter_directive(true, None),
            "bisearch=debug,bisearch_core=debug"
        );
    }

    #[test]
    fn test_filter_directive_explicit_level() {
        assert_eq!(
            filter_directive(true, Some("trace")),
            "bisearch=trace,bisearch_core=trace"
        );
        assert_eq!(
            filter_directive(false, Some("bisearch_core::graph=trace")),
            "bisearch_core::graph=trace"
        );
    }
}
