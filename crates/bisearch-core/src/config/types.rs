//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::{EndpointPolicy, Strategy};

/// File name looked up when no config path is given
pub const CONFIG_FILE_NAME: &str = "bisearch.toml";

/// Contents of `bisearch.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[search]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub endpoints: EndpointPolicy,

    /// Expansion budget for both frontiers combined (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
