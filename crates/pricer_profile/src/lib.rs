//! # Pricer Profile
//!
//! Price-risk profile engine for a single option position. The underlying
//! is simulated under Geometric Brownian Motion with one step per calendar
//! day; the simulated outcomes are summarised as terminal-price statistics,
//! a frequency histogram and a time-indexed percentile cone.
//!
//! ## Layout
//!
//! - [`request`]: position and market parameters ([`SimulationRequest`])
//! - [`config`]: execution settings ([`SimulationConfig`])
//! - [`rng`]: injected uniform sources and Box-Muller normals
//! - [`simulation`]: the path simulator ([`PathSimulator`])
//! - [`analysis`]: statistics, histogram and percentile bands
//! - [`profile`]: one-call simulate-and-analyse ([`RiskProfile`])
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_profile::analysis::{build_histogram, build_percentile_bands, compute_stats};
//! use pricer_profile::request::SimulationRequest;
//! use pricer_profile::rng::PricerRng;
//! use pricer_profile::simulation::simulate;
//!
//! let request = SimulationRequest::new(100.0, 95.0, 30, 0.30, 0.045);
//! let mut rng = PricerRng::from_seed(42);
//!
//! let result = simulate(&request, &mut rng).unwrap();
//! let stats = compute_stats(&result, request.strike).unwrap();
//! let histogram = build_histogram(result.terminal_prices(), 50).unwrap();
//! let cone = build_percentile_bands(result.sampled_paths()).unwrap();
//!
//! assert!(stats.percentile(5).unwrap() <= stats.percentile(95).unwrap());
//! assert_eq!(histogram.total_count(), 10_000);
//! assert_eq!(cone.len(), 31);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for requests, results and statistics

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod profile;
pub mod request;
pub mod rng;
pub mod simulation;

pub use analysis::{DistributionAnalyzer, DistributionStats, HistogramBins, PercentileBandSeries};
pub use config::SimulationConfig;
pub use error::{ProfileError, Result};
pub use profile::RiskProfile;
pub use request::{OptionSide, SimulationRequest};
pub use simulation::{PathSimulator, SimulationResult};
