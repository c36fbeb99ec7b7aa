//! Fixed-width frequency histogram over terminal prices.

use tracing::debug;

use crate::error::{ProfileError, Result};

/// Lower padding factor applied to the smallest price.
const RANGE_LOWER_PAD: f64 = 0.95;

/// Upper padding factor applied to the largest price.
const RANGE_UPPER_PAD: f64 = 1.05;

/// One histogram bin covering `[lower, upper)` (the last bin is closed).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Number of prices assigned to this bin.
    pub count: usize,
}

/// Equal-width histogram over `[min × 0.95, max × 1.05]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBins {
    /// Bins in ascending price order.
    pub bins: Vec<HistogramBin>,
    /// Lower edge of the first bin.
    pub range_min: f64,
    /// Upper edge of the last bin.
    pub range_max: f64,
    /// Width of every bin.
    pub bin_width: f64,
}

impl HistogramBins {
    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// `true` if there are no bins (never the case for a built histogram).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all bin counts.
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Bin with the highest count; the first one wins ties.
    pub fn mode_bin(&self) -> Option<&HistogramBin> {
        self.bins
            .iter()
            .reduce(|best, bin| if bin.count > best.count { bin } else { best })
    }
}

/// Bins `prices` into `bin_count` equal-width bins.
///
/// Each price lands in `min(bin_count - 1, floor((price - range_min) / width))`.
/// If every price is identical (or the range has no positive finite width)
/// all prices are placed in bin 0.
///
/// # Errors
///
/// - `InvalidParameter` if `bin_count` is 0
/// - `EmptyDistribution` if `prices` is empty
///
/// # Examples
///
/// ```rust
/// use pricer_profile::analysis::build_histogram;
///
/// let histogram = build_histogram(&[90.0, 100.0, 110.0], 4).unwrap();
/// assert_eq!(histogram.len(), 4);
/// assert_eq!(histogram.total_count(), 3);
/// assert_eq!(histogram.range_min, 90.0 * 0.95);
/// ```
pub fn build_histogram(prices: &[f64], bin_count: usize) -> Result<HistogramBins> {
    if bin_count == 0 {
        return Err(ProfileError::invalid("bin_count", "must be at least 1"));
    }
    if prices.is_empty() {
        return Err(ProfileError::EmptyDistribution);
    }

    let (min, max) = prices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        });

    let range_min = min * RANGE_LOWER_PAD;
    let range_max = max * RANGE_UPPER_PAD;
    let width = (range_max - range_min) / bin_count as f64;
    let degenerate = min == max || !(width > 0.0 && width.is_finite());

    let mut counts = vec![0_usize; bin_count];
    if degenerate {
        debug!(min, max, "zero-range distribution, all prices assigned to bin 0");
        counts[0] = prices.len();
    } else {
        for &price in prices {
            let raw = ((price - range_min) / width).floor();
            // Negative or NaN offsets saturate to 0 in the cast.
            let index = (raw as usize).min(bin_count - 1);
            counts[index] += 1;
        }
    }

    let bin_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = range_min + i as f64 * bin_width;
            let upper = if i + 1 == bin_count {
                range_max
            } else {
                range_min + (i + 1) as f64 * bin_width
            };
            HistogramBin {
                lower,
                upper,
                count,
            }
        })
        .collect();

    Ok(HistogramBins {
        bins,
        range_min,
        range_max,
        bin_width,
    })
}
