//! Nearest-rank percentiles over sorted samples.
//!
//! The rank of percentile `p` in `n` sorted samples is
//! `min(n - 1, floor(n × p / 100))`. No interpolation is performed; the
//! value returned is always one of the samples.

use crate::error::{ProfileError, Result};

/// Percentile labels reported in distribution statistics.
pub const STAT_PERCENTILES: [u32; 7] = [5, 10, 25, 50, 75, 90, 95];

/// Percentile levels tracked by the probability cone.
pub const BAND_PERCENTILES: [u32; 5] = [5, 25, 50, 75, 95];

/// Index of percentile `p` within `n` sorted samples.
///
/// Computed in integer arithmetic so the floor is exact. `n` must be
/// non-zero.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::nearest_rank_index;
///
/// assert_eq!(nearest_rank_index(10, 50), 5);
/// assert_eq!(nearest_rank_index(10, 95), 9);
/// assert_eq!(nearest_rank_index(10, 100), 9); // clamped
/// assert_eq!(nearest_rank_index(1, 5), 0);
/// ```
#[inline]
pub fn nearest_rank_index(n: usize, p: u32) -> usize {
    debug_assert!(n > 0);
    let rank = (n as u128 * u128::from(p)) / 100;
    (rank as usize).min(n - 1)
}

/// Sorts `values` ascending in place.
///
/// Stable; uses the IEEE total order so the sort never panics.
#[inline]
pub(crate) fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}

/// An ascending-sorted, non-empty copy of a sample.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::SortedTerminals;
///
/// let sorted = SortedTerminals::from_unsorted(&[3.0, 1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(sorted.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(sorted.value_at(50), 3.0);
/// assert_eq!(sorted.probability_below(3.0), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SortedTerminals {
    values: Vec<f64>,
}

impl SortedTerminals {
    /// Copies and sorts `values`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDistribution` if `values` is empty.
    pub fn from_unsorted(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }

    /// Sorts `values` in place and takes ownership.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDistribution` if `values` is empty.
    pub fn from_vec(mut values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ProfileError::EmptyDistribution);
        }
        sort_ascending(&mut values);
        Ok(Self { values })
    }

    /// Number of samples (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted samples.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smallest sample.
    #[inline]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Largest sample.
    #[inline]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Nearest-rank percentile `p` (0–100).
    #[inline]
    pub fn value_at(&self, p: u32) -> f64 {
        self.values[nearest_rank_index(self.values.len(), p)]
    }

    /// Number of samples strictly below `level`.
    #[inline]
    pub fn count_below(&self, level: f64) -> usize {
        self.values.partition_point(|&x| x < level)
    }

    /// Fraction of samples strictly below `level`.
    #[inline]
    pub fn probability_below(&self, level: f64) -> f64 {
        self.count_below(level) as f64 / self.values.len() as f64
    }
}
