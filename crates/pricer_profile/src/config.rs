//! Simulation engine configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. Configuration
//! governs how a request is executed (stored path cap, RNG stream layout,
//! parallelism, histogram resolution); it never changes what is simulated.

use crate::error::{ProfileError, Result};

/// Default number of trials whose full daily path is retained.
pub const DEFAULT_SAMPLED_PATH_LIMIT: usize = 100;

/// Default number of consecutive trials drawn from one RNG stream.
pub const DEFAULT_TRIALS_PER_STREAM: usize = 1_024;

/// Default trial count at or above which blocks are simulated on Rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 50;

/// Simulation engine configuration.
///
/// Immutable once built. Use [`SimulationConfigBuilder`] to construct
/// instances; every field has a default.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .sampled_path_limit(50)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sampled_path_limit(), 50);
/// assert_eq!(config.bin_count(), 50);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum number of full paths retained for the probability cone.
    sampled_path_limit: usize,
    /// Number of consecutive trials sharing one RNG stream.
    trials_per_stream: usize,
    /// Trial count at or above which simulation runs in parallel.
    parallel_threshold: usize,
    /// Number of histogram bins.
    bin_count: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sampled_path_limit: DEFAULT_SAMPLED_PATH_LIMIT,
            trials_per_stream: DEFAULT_TRIALS_PER_STREAM,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            bin_count: DEFAULT_BIN_COUNT,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the maximum number of retained full paths.
    #[inline]
    pub fn sampled_path_limit(&self) -> usize {
        self.sampled_path_limit
    }

    /// Returns the number of trials per RNG stream.
    #[inline]
    pub fn trials_per_stream(&self) -> usize {
        self.trials_per_stream
    }

    /// Returns the parallel execution threshold.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns the histogram bin count.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether `path_count` trials should be simulated in parallel.
    #[inline]
    pub fn should_parallelize(&self, path_count: usize) -> bool {
        path_count >= self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `sampled_path_limit`,
    /// `trials_per_stream` or `bin_count` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.sampled_path_limit == 0 {
            return Err(ProfileError::invalid("sampled_path_limit", "must be at least 1"));
        }
        if self.trials_per_stream == 0 {
            return Err(ProfileError::invalid("trials_per_stream", "must be at least 1"));
        }
        if self.bin_count == 0 {
            return Err(ProfileError::invalid("bin_count", "must be at least 1"));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to the crate defaults; validation runs at
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    sampled_path_limit: Option<usize>,
    trials_per_stream: Option<usize>,
    parallel_threshold: Option<usize>,
    bin_count: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the maximum number of retained full paths.
    #[inline]
    pub fn sampled_path_limit(mut self, limit: usize) -> Self {
        self.sampled_path_limit = Some(limit);
        self
    }

    /// Sets the number of consecutive trials drawn from one RNG stream.
    ///
    /// Changing this value changes the simulated numbers for a given seed.
    #[inline]
    pub fn trials_per_stream(mut self, trials: usize) -> Self {
        self.trials_per_stream = Some(trials);
        self
    }

    /// Sets the trial count at or above which simulation runs in parallel.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Sets the histogram bin count.
    #[inline]
    pub fn bin_count(mut self, bins: usize) -> Self {
        self.bin_count = Some(bins);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given, leaving it unset otherwise.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any count is zero.
    pub fn build(self) -> Result<SimulationConfig> {
        let config = SimulationConfig {
            sampled_path_limit: self
                .sampled_path_limit
                .unwrap_or(DEFAULT_SAMPLED_PATH_LIMIT),
            trials_per_stream: self.trials_per_stream.unwrap_or(DEFAULT_TRIALS_PER_STREAM),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            bin_count: self.bin_count.unwrap_or(DEFAULT_BIN_COUNT),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();

        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.sampled_path_limit(), 100);
        assert_eq!(config.trials_per_stream(), 1_024);
        assert_eq!(config.parallel_threshold(), 4_096);
        assert_eq!(config.bin_count(), 50);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = SimulationConfig::builder()
            .sampled_path_limit(10)
            .trials_per_stream(64)
            .parallel_threshold(1)
            .bin_count(20)
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(config.sampled_path_limit(), 10);
        assert_eq!(config.trials_per_stream(), 64);
        assert_eq!(config.bin_count(), 20);
        assert_eq!(config.seed(), Some(7));
        assert!(config.should_parallelize(1));
    }

    #[test]
    fn test_maybe_seed() {
        let config = SimulationConfig::builder()
            .seed(3)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_should_parallelize_threshold() {
        let config = SimulationConfig::default();
        assert!(!config.should_parallelize(4_095));
        assert!(config.should_parallelize(4_096));
    }

    #[test]
    fn test_config_rejects_zero_counts() {
        let result = SimulationConfig::builder().sampled_path_limit(0).build();
        assert!(matches!(
            result,
            Err(ProfileError::InvalidParameter {
                field: "sampled_path_limit",
                ..
            })
        ));

        let result = SimulationConfig::builder().trials_per_stream(0).build();
        assert!(matches!(
            result,
            Err(ProfileError::InvalidParameter {
                field: "trials_per_stream",
                ..
            })
        ));

        let result = SimulationConfig::builder().bin_count(0).build();
        assert!(matches!(
            result,
            Err(ProfileError::InvalidParameter {
                field: "bin_count",
                ..
            })
        ));
    }
}
