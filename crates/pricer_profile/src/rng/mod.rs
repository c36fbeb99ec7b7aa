//! # Random Number Generation
//!
//! Uniform randomness is injected into the simulator through the
//! [`UniformSource`] trait rather than read from a process-wide generator.
//! Standard normal variates are derived from those uniforms with the
//! Box-Muller transform ([`box_muller`]).
//!
//! ## Design
//!
//! - **Reproducibility**: [`PricerRng`] is seeded; the same seed yields the
//!   same uniform sequence and therefore the same simulated paths
//! - **Isolation**: parallel workers each own a stream from
//!   [`PricerRng::stream`]; no generator is shared across threads
//! - **Static dispatch**: the simulator is generic over `U: UniformSource`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_profile::rng::{box_muller, PricerRng, UniformSource};
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let z = box_muller(&mut rng);
//! assert!(z.is_finite());
//! ```
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded wrapper around `rand::rngs::StdRng`
//! - [`normal`]: Box-Muller standard normal sampling
//! - [`replay`]: fixed-sequence source for deterministic tests

mod normal;
mod prng;
mod replay;

pub use normal::{box_muller, fill_normal};
pub use prng::PricerRng;
pub use replay::ReplaySource;

/// A source of uniform samples in the half-open interval [0, 1).
///
/// Implementors must return values in `[0, 1)`. A value of exactly `0.0`
/// is permitted; the normal sampler rejects and redraws it.
pub trait UniformSource {
    /// Returns the next uniform sample in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
