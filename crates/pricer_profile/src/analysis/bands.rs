//! Time-indexed percentile bands (the probability cone).

use super::percentile::{nearest_rank_index, sort_ascending, BAND_PERCENTILES};
use crate::error::{ProfileError, Result};

/// Nearest-rank 5/25/50/75/95 percentiles at every simulated day.
///
/// Each series has one entry per point of the sampled paths
/// (`steps + 1`, starting at spot).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentileBandSeries {
    /// 5th percentile per step.
    pub p5: Vec<f64>,
    /// 25th percentile per step.
    pub p25: Vec<f64>,
    /// 50th percentile per step.
    pub p50: Vec<f64>,
    /// 75th percentile per step.
    pub p75: Vec<f64>,
    /// 95th percentile per step.
    pub p95: Vec<f64>,
}

impl PercentileBandSeries {
    fn with_capacity(points: usize) -> Self {
        Self {
            p5: Vec::with_capacity(points),
            p25: Vec::with_capacity(points),
            p50: Vec::with_capacity(points),
            p75: Vec::with_capacity(points),
            p95: Vec::with_capacity(points),
        }
    }

    /// Series for `level`, if it is one of 5, 25, 50, 75 or 95.
    pub fn band(&self, level: u32) -> Option<&[f64]> {
        match level {
            5 => Some(&self.p5),
            25 => Some(&self.p25),
            50 => Some(&self.p50),
            75 => Some(&self.p75),
            95 => Some(&self.p95),
            _ => None,
        }
    }

    /// Number of points per series (`steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.p50.len()
    }

    /// `true` if the series hold no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.p50.is_empty()
    }

    /// Spread between the 95th and 5th percentile at `step`.
    pub fn width_at(&self, step: usize) -> Option<f64> {
        Some(self.p95.get(step)? - self.p5.get(step)?)
    }

    fn push(&mut self, level: u32, value: f64) {
        match level {
            5 => self.p5.push(value),
            25 => self.p25.push(value),
            50 => self.p50.push(value),
            75 => self.p75.push(value),
            _ => self.p95.push(value),
        }
    }
}

/// Builds the probability cone from sampled paths.
///
/// For each step `t`, the cross-section `{path[t]}` is sorted and the
/// nearest-rank 5/25/50/75/95 percentiles are taken.
///
/// # Errors
///
/// - `EmptyDistribution` if `paths` is empty or the paths have no points
/// - `InconsistentPathLength` if any path differs in length from the first
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::build_percentile_bands;
///
/// let paths = vec![vec![100.0, 90.0], vec![100.0, 110.0]];
/// let bands = build_percentile_bands(&paths).unwrap();
///
/// assert_eq!(bands.len(), 2);
/// assert_eq!(bands.p50, vec![100.0, 110.0]);
/// assert_eq!(bands.p5, vec![100.0, 90.0]);
/// ```
pub fn build_percentile_bands(paths: &[Vec<f64>]) -> Result<PercentileBandSeries> {
    let first = paths.first().ok_or(ProfileError::EmptyDistribution)?;
    let points = first.len();

    if let Some((path_index, path)) = paths
        .iter()
        .enumerate()
        .find(|(_, path)| path.len() != points)
    {
        return Err(ProfileError::InconsistentPathLength {
            path_index,
            expected: points,
            found: path.len(),
        });
    }
    if points == 0 {
        return Err(ProfileError::EmptyDistribution);
    }

    let n = paths.len();
    let mut series = PercentileBandSeries::with_capacity(points);
    let mut column = Vec::with_capacity(n);

    for step in 0..points {
        column.clear();
        column.extend(paths.iter().map(|path| path[step]));
        sort_ascending(&mut column);

        for level in BAND_PERCENTILES {
            series.push(level, column[nearest_rank_index(n, level)]);
        }
    }

    Ok(series)
}
