//! CLI configuration file handling.
//!
//! An optional TOML file supplies simulation defaults; command-line flags
//! take precedence over anything it sets.
//!
//! ```toml
//! [simulation]
//! path_count = 20000
//! sampled_path_limit = 100
//! bin_count = 60
//! seed = 42
//! ```

use std::path::Path;

use pricer_profile::SimulationConfig;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `[simulation]` table.
    pub simulation: SimulationSection,
}

/// Simulation defaults; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    /// Simulated paths per run, used when `--paths` is absent.
    pub path_count: Option<usize>,
    /// Full paths kept for the probability cone.
    pub sampled_path_limit: Option<usize>,
    /// Trials drawn from each seeded RNG stream.
    pub trials_per_stream: Option<usize>,
    /// Path count at which simulation switches to rayon.
    pub parallel_threshold: Option<usize>,
    /// Histogram bins, used when `--bins` is absent.
    pub bin_count: Option<usize>,
    /// RNG seed, used when `--seed` is absent.
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Builds an engine configuration, letting explicit overrides win.
    pub fn simulation_config(
        &self,
        bin_count: Option<usize>,
        seed: Option<u64>,
    ) -> Result<SimulationConfig> {
        let section = &self.simulation;
        let mut builder = SimulationConfig::builder().maybe_seed(seed.or(section.seed));

        if let Some(limit) = section.sampled_path_limit {
            builder = builder.sampled_path_limit(limit);
        }
        if let Some(trials) = section.trials_per_stream {
            builder = builder.trials_per_stream(trials);
        }
        if let Some(threshold) = section.parallel_threshold {
            builder = builder.parallel_threshold(threshold);
        }
        if let Some(bins) = bin_count.or(section.bin_count) {
            builder = builder.bin_count(bins);
        }

        Ok(builder.build()?)
    }
}
