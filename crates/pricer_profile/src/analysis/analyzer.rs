//! Analyser facade bundling the bin count with the three terminal analyses.

use super::bands::{build_percentile_bands, PercentileBandSeries};
use super::histogram::{build_histogram, HistogramBins};
use super::stats::{compute_stats, DistributionStats};
use crate::config::DEFAULT_BIN_COUNT;
use crate::error::{ProfileError, Result};
use crate::simulation::SimulationResult;

/// Runs every analysis over a simulation result.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::DistributionAnalyzer;
/// use pricer_profile::request::SimulationRequest;
/// use pricer_profile::rng::PricerRng;
/// use pricer_profile::simulation::simulate;
///
/// let request = SimulationRequest::new(100.0, 95.0, 10, 0.25, 0.03).with_path_count(500);
/// let result = simulate(&request, &mut PricerRng::from_seed(1)).unwrap();
///
/// let analyzer = DistributionAnalyzer::new(20).unwrap();
/// let (stats, histogram, bands) = analyzer.analyse(&result).unwrap();
///
/// assert_eq!(stats.sample_count, 500);
/// assert_eq!(histogram.total_count(), 500);
/// assert_eq!(bands.len(), 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionAnalyzer {
    bin_count: usize,
}

impl Default for DistributionAnalyzer {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl DistributionAnalyzer {
    /// Creates an analyser producing `bin_count` histogram bins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `bin_count` is 0.
    pub fn new(bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(ProfileError::invalid("bin_count", "must be at least 1"));
        }
        Ok(Self { bin_count })
    }

    /// Histogram bin count.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Statistics against the request's own strike.
    pub fn compute_stats(&self, result: &SimulationResult) -> Result<DistributionStats> {
        compute_stats(result, result.request().strike)
    }

    /// Histogram of the result's terminal prices.
    pub fn build_histogram(&self, result: &SimulationResult) -> Result<HistogramBins> {
        build_histogram(result.terminal_prices(), self.bin_count)
    }

    /// Probability cone of the result's sampled paths.
    pub fn build_percentile_bands(
        &self,
        result: &SimulationResult,
    ) -> Result<PercentileBandSeries> {
        build_percentile_bands(result.sampled_paths())
    }

    /// All three analyses; the first failure aborts the rest.
    pub fn analyse(
        &self,
        result: &SimulationResult,
    ) -> Result<(DistributionStats, HistogramBins, PercentileBandSeries)> {
        let stats = self.compute_stats(result)?;
        let histogram = self.build_histogram(result)?;
        let bands = self.build_percentile_bands(result)?;
        Ok((stats, histogram, bands))
    }
}
