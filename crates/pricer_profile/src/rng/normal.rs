//! Standard normal sampling via the Box-Muller transform.

use std::f64::consts::TAU;

use super::UniformSource;

/// Draws a uniform sample in the open interval (0, 1).
///
/// Exact zeros are rejected and redrawn so that `ln(u)` stays finite.
#[inline]
fn open_uniform<U: UniformSource + ?Sized>(source: &mut U) -> f64 {
    loop {
        let u = source.next_uniform();
        if u > 0.0 {
            return u;
        }
    }
}

/// Generates one standard normal variate (mean 0, variance 1).
///
/// Uses the cosine branch of the Box-Muller transform over two independent
/// uniforms:
///
/// ```text
/// Z = sqrt(-2 ln u1) × cos(2π u2)
/// ```
///
/// Both uniforms are drawn through the zero-rejection step, so each variate
/// consumes at least two samples from `source`.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::rng::{box_muller, ReplaySource};
///
/// // u1 = e^-0.5 gives a radius of 1; u2 = 0.5 gives cos(π) = -1.
/// let mut source = ReplaySource::new(vec![(-0.5_f64).exp(), 0.5]).unwrap();
/// let z = box_muller(&mut source);
/// assert!((z + 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn box_muller<U: UniformSource + ?Sized>(source: &mut U) -> f64 {
    let u1 = open_uniform(source);
    let u2 = open_uniform(source);
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Fills `buffer` with standard normal variates.
///
/// Zero-allocation; the buffer must be pre-allocated by the caller.
#[inline]
pub fn fill_normal<U: UniformSource + ?Sized>(source: &mut U, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = box_muller(source);
    }
}
