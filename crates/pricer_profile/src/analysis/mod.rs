//! Distribution analysis of simulated terminal prices and paths.
//!
//! Three independent, stateless transforms over a
//! [`SimulationResult`](crate::simulation::SimulationResult):
//!
//! - [`compute_stats`]: moments, nearest-rank percentiles, strike split
//! - [`build_histogram`]: equal-width frequency bins over terminal prices
//! - [`build_percentile_bands`]: per-day percentiles of the sampled paths
//!
//! [`DistributionAnalyzer`] bundles them behind one bin-count setting.

mod analyzer;
mod bands;
mod histogram;
mod percentile;
mod stats;

pub use analyzer::DistributionAnalyzer;
pub use bands::{build_percentile_bands, PercentileBandSeries};
pub use histogram::{build_histogram, HistogramBin, HistogramBins};
pub use percentile::{nearest_rank_index, SortedTerminals, BAND_PERCENTILES, STAT_PERCENTILES};
pub use stats::{compute_stats, DistributionStats};
