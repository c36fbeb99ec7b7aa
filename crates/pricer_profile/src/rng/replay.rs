//! Fixed-sequence uniform source.

use super::UniformSource;
use crate::error::{ProfileError, Result};

/// Replays a fixed sequence of uniforms, wrapping around at the end.
///
/// Useful where exact control over the random inputs is needed, e.g. to
/// pin down the zero-rejection path of the normal sampler.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::rng::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.75);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
    drawn: usize,
}

impl ReplaySource {
    /// Creates a source over `values`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `values` is empty, contains a value
    /// outside [0, 1), or contains only zeros (which the normal sampler
    /// would reject forever).
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ProfileError::invalid("values", "must not be empty"));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(ProfileError::invalid(
                "values",
                format!("uniform samples must lie in [0, 1), got {}", bad),
            ));
        }
        if values.iter().all(|&v| v == 0.0) {
            return Err(ProfileError::invalid("values", "at least one sample must be non-zero"));
        }
        Ok(Self {
            values,
            cursor: 0,
            drawn: 0,
        })
    }

    /// Total number of samples handed out so far.
    #[inline]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl UniformSource for ReplaySource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.drawn += 1;
        value
    }
}
