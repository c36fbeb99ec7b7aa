//! Path simulation under Geometric Brownian Motion.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationConfig   (sample cap, stream layout, parallelism)
//! ├── GbmStepper         (precomputed drift / diffusion per day)
//! └── UniformSource      (injected, or per-block PricerRng streams)
//! ```
//!
//! Two entry points share the same trial kernel:
//!
//! - [`PathSimulator::simulate`] draws from one caller-supplied source in
//!   trial order.
//! - [`PathSimulator::simulate_seeded`] splits trials into blocks with
//!   isolated seeded streams and may run them on Rayon; output is identical
//!   whichever way the blocks are scheduled.

pub mod paths;
pub mod simulator;

pub use paths::GbmStepper;
pub use simulator::{simulate, PathSimulator, SimulationResult};
