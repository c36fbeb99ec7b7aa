//! Terminal-price distribution statistics.

use std::collections::BTreeMap;

use super::percentile::{SortedTerminals, STAT_PERCENTILES};
use crate::error::{ProfileError, Result};
use crate::request::OptionSide;
use crate::simulation::SimulationResult;

/// Summary of the terminal-price distribution.
///
/// `percentiles` uses nearest-rank selection and is keyed by label
/// (5, 10, 25, 50, 75, 90, 95). `std_dev` is the population standard
/// deviation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionStats {
    /// Number of terminal prices.
    pub sample_count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Nearest-rank 50th percentile.
    pub median: f64,
    /// Population standard deviation around `mean`.
    pub std_dev: f64,
    /// Smallest terminal price.
    pub min: f64,
    /// Largest terminal price.
    pub max: f64,
    /// Nearest-rank percentiles keyed by label.
    pub percentiles: BTreeMap<u32, f64>,
    /// Strike the fractions were computed against.
    pub strike: f64,
    /// Side used for the ITM/OTM mapping.
    pub side: OptionSide,
    /// Fraction of terminal prices strictly below strike.
    pub below_strike_fraction: f64,
    /// Fraction of terminal prices at or above strike.
    pub above_strike_fraction: f64,
    /// In-the-money fraction for `side`.
    pub itm_fraction: f64,
    /// Out-of-the-money fraction for `side`.
    pub otm_fraction: f64,
    /// `spot × σ × sqrt(days / 365)`.
    pub expected_move: f64,
}

impl DistributionStats {
    /// Percentile for `label`, if it is one of the reported labels.
    #[inline]
    pub fn percentile(&self, label: u32) -> Option<f64> {
        self.percentiles.get(&label).copied()
    }
}

/// Computes distribution statistics for `result` against `strike`.
///
/// The ITM/OTM mapping follows `result.request().side`.
///
/// # Errors
///
/// - `InvalidParameter` if `strike` is not a positive finite number
/// - `EmptyDistribution` if the result has no terminal prices
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::compute_stats;
/// use pricer_profile::request::SimulationRequest;
/// use pricer_profile::simulation::SimulationResult;
///
/// let request = SimulationRequest::new(100.0, 95.0, 30, 0.3, 0.0);
/// let result = SimulationResult::new(request, vec![90.0, 100.0, 110.0, 120.0], Vec::new());
///
/// let stats = compute_stats(&result, 95.0).unwrap();
/// assert_eq!(stats.mean, 105.0);
/// assert_eq!(stats.median, 110.0);
/// assert_eq!(stats.below_strike_fraction, 0.25);
/// assert_eq!(stats.itm_fraction + stats.otm_fraction, 1.0);
/// ```
pub fn compute_stats(result: &SimulationResult, strike: f64) -> Result<DistributionStats> {
    if !(strike > 0.0 && strike.is_finite()) {
        return Err(ProfileError::invalid(
            "strike",
            format!("must be a positive finite number, got {}", strike),
        ));
    }

    let sorted = SortedTerminals::from_unsorted(result.terminal_prices())?;
    let request = result.request();
    Ok(stats_from_sorted(&sorted, strike, request.side, request.expected_move()))
}

/// Builds statistics from an already-sorted sample.
pub(crate) fn stats_from_sorted(
    sorted: &SortedTerminals,
    strike: f64,
    side: OptionSide,
    expected_move: f64,
) -> DistributionStats {
    let values = sorted.as_slice();
    let n = values.len() as f64;

    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;

    let percentiles = STAT_PERCENTILES
        .iter()
        .map(|&p| (p, sorted.value_at(p)))
        .collect();

    let below = sorted.probability_below(strike);
    let above = 1.0 - below;
    let (itm_fraction, otm_fraction) = side.split(below, above);

    DistributionStats {
        sample_count: values.len(),
        mean,
        median: sorted.value_at(50),
        std_dev: variance.sqrt(),
        min: sorted.min(),
        max: sorted.max(),
        percentiles,
        strike,
        side,
        below_strike_fraction: below,
        above_strike_fraction: above,
        itm_fraction,
        otm_fraction,
        expected_move,
    }
}
