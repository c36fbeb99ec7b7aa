//! Path simulator: runs independent GBM trials for a request.

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info_span};

use super::paths::GbmStepper;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::request::SimulationRequest;
use crate::rng::{PricerRng, UniformSource};

/// Output of one simulation pass.
///
/// `terminal_prices` are in trial order and unsorted; sorting is left to
/// the analyser. `sampled_paths` hold the first
/// `min(sampled_path_limit, path_count)` trials in full, each with
/// `steps + 1` points starting at spot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    request: SimulationRequest,
    terminal_prices: Vec<f64>,
    sampled_paths: Vec<Vec<f64>>,
}

impl SimulationResult {
    /// Assembles a result from externally produced samples.
    ///
    /// No consistency checks are made here; the analyser reports empty or
    /// ragged inputs when it consumes them.
    pub fn new(
        request: SimulationRequest,
        terminal_prices: Vec<f64>,
        sampled_paths: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            request,
            terminal_prices,
            sampled_paths,
        }
    }

    /// The request this result was produced from.
    #[inline]
    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }

    /// Number of daily steps per stored path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.request.steps()
    }

    /// Terminal prices, one per trial, in trial order.
    #[inline]
    pub fn terminal_prices(&self) -> &[f64] {
        &self.terminal_prices
    }

    /// Stored full paths, in trial order.
    #[inline]
    pub fn sampled_paths(&self) -> &[Vec<f64>] {
        &self.sampled_paths
    }
}

/// Trials `[start, end)` of one RNG stream.
struct Block {
    terminals: Vec<f64>,
    paths: Vec<Vec<f64>>,
}

fn run_block<U: UniformSource + ?Sized>(
    stepper: &GbmStepper,
    source: &mut U,
    start: usize,
    end: usize,
    sample_limit: usize,
) -> Block {
    let stored = sample_limit.saturating_sub(start).min(end - start);
    let mut terminals = Vec::with_capacity(end - start);
    let mut paths = Vec::with_capacity(stored);

    for trial in start..end {
        if trial < sample_limit {
            let mut path = Vec::with_capacity(stepper.steps() + 1);
            terminals.push(stepper.run_trial(source, Some(&mut path)));
            paths.push(path);
        } else {
            terminals.push(stepper.run_trial(source, None));
        }
    }

    Block { terminals, paths }
}

/// GBM path simulator.
///
/// Stateless apart from its configuration: every call produces a fresh
/// [`SimulationResult`] and nothing is shared between calls.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::config::SimulationConfig;
/// use pricer_profile::request::SimulationRequest;
/// use pricer_profile::simulation::PathSimulator;
///
/// let config = SimulationConfig::builder().seed(42).build().unwrap();
/// let simulator = PathSimulator::new(config);
///
/// let request = SimulationRequest::new(100.0, 95.0, 30, 0.30, 0.045).with_path_count(1_000);
/// let result = simulator.simulate_seeded(&request).unwrap();
///
/// assert_eq!(result.terminal_prices().len(), 1_000);
/// assert_eq!(result.sampled_paths().len(), 100);
/// assert_eq!(result.sampled_paths()[0].len(), 31);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathSimulator {
    config: SimulationConfig,
}

impl PathSimulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `request` drawing every uniform from `source`, in trial order.
    ///
    /// Single-threaded. Identical sources yield bit-identical results.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the request fails validation.
    pub fn simulate<U: UniformSource + ?Sized>(
        &self,
        request: &SimulationRequest,
        source: &mut U,
    ) -> Result<SimulationResult> {
        request.validate()?;
        let span = info_span!("simulate", paths = request.path_count, steps = request.steps());
        let _guard = span.enter();

        let stepper = GbmStepper::new(request);
        let block = run_block(
            &stepper,
            source,
            0,
            request.path_count,
            self.config.sampled_path_limit(),
        );

        debug!(sampled = block.paths.len(), "simulation complete");
        Ok(SimulationResult::new(*request, block.terminals, block.paths))
    }

    /// Simulates `request` over independent per-block RNG streams.
    ///
    /// Trials are split into blocks of `trials_per_stream`; block `k` draws
    /// from `PricerRng::stream(seed, k)`. Blocks run on Rayon when the path
    /// count reaches `parallel_threshold` and are concatenated in block
    /// order, so the output depends only on the seed and the block size.
    ///
    /// If the configuration carries no seed, one is drawn from the thread
    /// RNG and logged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the request fails validation.
    pub fn simulate_seeded(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        request.validate()?;

        let seed = match self.config.seed() {
            Some(seed) => seed,
            None => {
                let seed = rand::thread_rng().gen::<u64>();
                debug!(seed, "no seed configured, drew one from the thread RNG");
                seed
            }
        };

        let path_count = request.path_count;
        let block_size = self.config.trials_per_stream();
        let sample_limit = self.config.sampled_path_limit();
        let n_blocks = path_count.div_ceil(block_size);
        let parallel = self.config.should_parallelize(path_count);

        let span = info_span!(
            "simulate_seeded",
            paths = path_count,
            steps = request.steps(),
            seed,
            blocks = n_blocks,
            parallel
        );
        let _guard = span.enter();

        let stepper = GbmStepper::new(request);
        let block_at = |k: usize| {
            let start = k * block_size;
            let end = (start + block_size).min(path_count);
            let mut rng = PricerRng::stream(seed, k as u64);
            run_block(&stepper, &mut rng, start, end, sample_limit)
        };

        let blocks: Vec<Block> = if parallel {
            (0..n_blocks).into_par_iter().map(block_at).collect()
        } else {
            (0..n_blocks).map(block_at).collect()
        };

        let mut terminal_prices = Vec::with_capacity(path_count);
        let mut sampled_paths = Vec::with_capacity(sample_limit.min(path_count));
        for block in blocks {
            terminal_prices.extend(block.terminals);
            sampled_paths.extend(block.paths);
        }

        debug!(sampled = sampled_paths.len(), "simulation complete");
        Ok(SimulationResult::new(*request, terminal_prices, sampled_paths))
    }
}

/// Simulates `request` with the default configuration and an injected source.
///
/// Shorthand for `PathSimulator::default().simulate(request, source)`.
pub fn simulate<U: UniformSource + ?Sized>(
    request: &SimulationRequest,
    source: &mut U,
) -> Result<SimulationResult> {
    PathSimulator::default().simulate(request, source)
}
