//! Daily GBM stepping for a single trial.
//!
//! Uses the log-space (exact) update for numerical stability:
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//! with `dt = 1/365` (one calendar day).

use crate::request::{SimulationRequest, DAYS_PER_YEAR};
use crate::rng::{box_muller, UniformSource};

/// Precomputed per-step drift and diffusion terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    spot: f64,
    steps: usize,
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStepper {
    /// Precomputes the step constants for `request`.
    pub fn new(request: &SimulationRequest) -> Self {
        let dt = 1.0 / DAYS_PER_YEAR;
        let sigma = request.volatility;

        Self {
            spot: request.spot,
            steps: request.steps(),
            drift_dt: (request.risk_free_rate - 0.5 * sigma * sigma) * dt,
            vol_sqrt_dt: sigma * dt.sqrt(),
        }
    }

    /// Number of steps per trial.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advances `price` by one day given a standard normal draw `z`.
    #[inline]
    pub fn advance(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }

    /// Runs one trial and returns its terminal price.
    ///
    /// When `path` is given it is cleared and receives the initial spot
    /// followed by every intermediate price (`steps + 1` values). The caller
    /// sizes the buffer; nothing is allocated per step.
    pub fn run_trial<U: UniformSource + ?Sized>(
        &self,
        source: &mut U,
        mut path: Option<&mut Vec<f64>>,
    ) -> f64 {
        let mut price = self.spot;

        if let Some(buffer) = path.as_deref_mut() {
            buffer.clear();
            buffer.push(price);
        }

        for _ in 0..self.steps {
            let z = box_muller(source);
            price = self.advance(price, z);
            if let Some(buffer) = path.as_deref_mut() {
                buffer.push(price);
            }
        }

        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PricerRng, ReplaySource};
    use approx::assert_relative_eq;

    fn request(volatility: f64, rate: f64, days: u32) -> SimulationRequest {
        SimulationRequest::new(100.0, 95.0, days, volatility, rate)
    }

    #[test]
    fn test_stepper_constants() {
        let stepper = GbmStepper::new(&request(0.2, 0.05, 10));
        let dt = 1.0 / 365.0;

        assert_eq!(stepper.steps(), 10);
        assert_relative_eq!(stepper.drift_dt, (0.05 - 0.02) * dt, epsilon = 1e-15);
        assert_relative_eq!(stepper.vol_sqrt_dt, 0.2 * dt.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_zero_vol_is_deterministic_drift() {
        let stepper = GbmStepper::new(&request(0.0, 0.045, 30));
        let mut rng = PricerRng::from_seed(1);

        let terminal = stepper.run_trial(&mut rng, None);
        let expected = 100.0 * (0.045_f64 * 30.0 / 365.0).exp();

        assert_relative_eq!(terminal, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_path_buffer_records_every_step() {
        let stepper = GbmStepper::new(&request(0.3, 0.01, 5));
        let mut rng = PricerRng::from_seed(9);
        let mut path = vec![42.0; 3];

        let terminal = stepper.run_trial(&mut rng, Some(&mut path));

        assert_eq!(path.len(), 6);
        assert_eq!(path[0], 100.0);
        assert_eq!(*path.last().unwrap(), terminal);
        assert!(path.iter().all(|p| *p > 0.0 && p.is_finite()));
    }

    #[test]
    fn test_single_step_matches_closed_form() {
        // Z = -1 from (u1, u2) = (e^-0.5, 0.5)
        let mut source = ReplaySource::new(vec![(-0.5_f64).exp(), 0.5]).unwrap();
        let stepper = GbmStepper::new(&request(0.2, 0.05, 1));

        let terminal = stepper.run_trial(&mut source, None);
        let dt: f64 = 1.0 / 365.0;
        let expected = 100.0 * ((0.05 - 0.5 * 0.04) * dt - 0.2 * dt.sqrt()).exp();

        assert_relative_eq!(terminal, expected, epsilon = 1e-10);
    }
}
