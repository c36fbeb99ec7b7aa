//! End-to-end risk profile: simulate, then analyse.

use tracing::debug;

use crate::analysis::{DistributionAnalyzer, DistributionStats, HistogramBins, PercentileBandSeries};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::request::SimulationRequest;
use crate::simulation::{PathSimulator, SimulationResult};

/// Everything an external report or chart needs for one position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskProfile {
    /// The simulated request.
    pub request: SimulationRequest,
    /// Terminal-price statistics.
    pub stats: DistributionStats,
    /// Terminal-price histogram.
    pub histogram: HistogramBins,
    /// Probability cone over the sampled paths.
    pub bands: PercentileBandSeries,
}

impl RiskProfile {
    /// Simulates `request` with [`PathSimulator::simulate_seeded`] and
    /// analyses the result.
    ///
    /// # Errors
    ///
    /// Propagates the first simulator or analyser error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_profile::config::SimulationConfig;
    /// use pricer_profile::profile::RiskProfile;
    /// use pricer_profile::request::SimulationRequest;
    ///
    /// let config = SimulationConfig::builder().seed(42).build().unwrap();
    /// let request = SimulationRequest::new(100.0, 95.0, 30, 0.30, 0.045).with_path_count(2_000);
    ///
    /// let profile = RiskProfile::compute(&request, &config).unwrap();
    /// assert_eq!(profile.histogram.len(), 50);
    /// assert_eq!(profile.bands.len(), 31);
    /// ```
    pub fn compute(request: &SimulationRequest, config: &SimulationConfig) -> Result<Self> {
        let result = PathSimulator::new(config.clone()).simulate_seeded(request)?;
        let analyzer = DistributionAnalyzer::new(config.bin_count())?;
        Self::from_result(&result, &analyzer)
    }

    /// Analyses an existing simulation result.
    ///
    /// # Errors
    ///
    /// Propagates the first analyser error.
    pub fn from_result(result: &SimulationResult, analyzer: &DistributionAnalyzer) -> Result<Self> {
        let (stats, histogram, bands) = analyzer.analyse(result)?;
        debug!(
            mean = stats.mean,
            median = stats.median,
            std_dev = stats.std_dev,
            itm = stats.itm_fraction,
            "risk profile computed"
        );

        Ok(Self {
            request: *result.request(),
            stats,
            histogram,
            bands,
        })
    }
}
