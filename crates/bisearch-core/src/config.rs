//! Configuration for bisearch
//!
//! Defaults are read from `bisearch.toml`. Command-line flags override
//! anything set here.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{BisearchError, Result};
use crate::graph::SearchOptions;

pub use types::{Config, OutputConfig, SearchConfig, CONFIG_FILE_NAME};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Look for `bisearch.toml` in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, `bisearch.toml` in `dir` is
    /// used if present, otherwise the defaults.
    #[tracing::instrument(skip(explicit, dir))]
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(BisearchError::invalid_value(
                    "config path",
                    path.display(),
                ));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::discover(dir) {
                Some(path) => path,
                None => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        tracing::debug!(path = %path.display(), "config_loaded");
        Self::load(&path)
    }

    fn validate(&self) -> Result<()> {
        if self.search.max_expansions == Some(0) {
            bail_invalid!("search.max_expansions", "0 (must be at least 1)");
        }
        Ok(())
    }

    /// Search options described by the `[search]` section
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            strategy: self.search.strategy,
            endpoints: self.search.endpoints,
            max_expansions: self.search.max_expansions,
        }
    }
}
