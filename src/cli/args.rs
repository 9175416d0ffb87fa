//! Arguments shared by the searching subcommands

use clap::Args;

use super::parse::{parse_max_expansions, parse_strategy};
use bisearch_core::graph::{EndpointPolicy, SearchOptions, Strategy};

/// Search flags; anything left unset falls back to the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Expansion strategy: breadth (hop count) or weighted (total weight)
    #[arg(long, short = 's', value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Fail when the start or goal node is not in the graph
    #[arg(long)]
    pub strict: bool,

    /// Stop after this many node expansions
    #[arg(long, value_parser = parse_max_expansions)]
    pub max_expansions: Option<usize>,

    /// Include what each frontier discovered
    #[arg(long)]
    pub trace: bool,
}

impl SearchArgs {
    /// Apply these flags on top of `base`
    pub fn apply(&self, base: SearchOptions) -> SearchOptions {
        SearchOptions {
            strategy: self.strategy.unwrap_or(base.strategy),
            endpoints: if self.strict {
                EndpointPolicy::Strict
            } else {
                base.endpoints
            },
            max_expansions: self.max_expansions.or(base.max_expansions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_base() {
        let base = SearchOptions {
            strategy: Strategy::Breadth,
            endpoints: EndpointPolicy::Lenient,
            max_expansions: Some(10),
        };
        let args = SearchArgs {
            strategy: Some(Strategy::Weighted),
            strict: true,
            max_expansions: None,
            trace: false,
        };

        let opts = args.apply(base);
        assert_eq!(opts.strategy, Strategy::Weighted);
        assert_eq!(opts.endpoints, EndpointPolicy::Strict);
        assert_eq!(opts.max_expansions, Some(10));
    }

    #[test]
    fn test_unset_flags_keep_base() {
        let base = SearchOptions {
            strategy: Strategy::Weighted,
            endpoints: EndpointPolicy::Strict,
            max_expansions: None,
        };

        let opts = SearchArgs::default().apply(base);
        assert_eq!(opts.strategy, Strategy::Weighted);
        assert_eq!(opts.endpoints, EndpointPolicy::Strict);
        assert_eq!(opts.max_expansions, None);
    }
}
