//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod cone;
pub mod run;

use pricer_profile::{OptionSide, SimulationRequest};

use crate::config::CliConfig;
use crate::Result;

/// Position and market flags shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct PositionArgs {
    /// Current underlying price
    #[arg(long)]
    pub spot: f64,

    /// Option strike price
    #[arg(long)]
    pub strike: f64,

    /// Calendar days until expiry
    #[arg(long)]
    pub days: u32,

    /// Annualised volatility (0.30 = 30%)
    #[arg(long)]
    pub volatility: f64,

    /// Annualised risk-free rate
    #[arg(long, default_value_t = 0.0)]
    pub rate: f64,

    /// Number of simulated paths (overrides the config file)
    #[arg(long)]
    pub paths: Option<usize>,

    /// Option side used for ITM/OTM classification (put, call)
    #[arg(long, default_value = "put")]
    pub side: OptionSide,

    /// RNG seed for reproducible output (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PositionArgs {
    /// Builds a validated request, falling back to the config file path count.
    pub fn to_request(&self, config: &CliConfig) -> Result<SimulationRequest> {
        let mut builder = SimulationRequest::builder()
            .spot(self.spot)
            .strike(self.strike)
            .days_to_expiry(self.days)
            .volatility(self.volatility)
            .risk_free_rate(self.rate)
            .side(self.side);

        if let Some(paths) = self.paths.or(config.simulation.path_count) {
            builder = builder.path_count(paths);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_profile::request::DEFAULT_PATH_COUNT;

    fn args() -> PositionArgs {
        PositionArgs {
            spot: 100.0,
            strike: 95.0,
            days: 30,
            volatility: 0.3,
            rate: 0.045,
            paths: None,
            side: OptionSide::Call,
            seed: None,
        }
    }

    #[test]
    fn test_path_count_precedence() {
        let empty = CliConfig::default();
        let file = CliConfig::from_toml_str("[simulation]\npath_count = 500\n").unwrap();

        assert_eq!(args().to_request(&empty).unwrap().path_count, DEFAULT_PATH_COUNT);
        assert_eq!(args().to_request(&file).unwrap().path_count, 500);

        let flagged = PositionArgs {
            paths: Some(42),
            ..args()
        };
        assert_eq!(flagged.to_request(&file).unwrap().path_count, 42);
    }

    #[test]
    fn test_request_carries_side() {
        let request = args().to_request(&CliConfig::default()).unwrap();
        assert_eq!(request.side, OptionSide::Call);
        assert_eq!(request.days_to_expiry, 30);
    }

    #[test]
    fn test_invalid_position_is_rejected() {
        let bad = PositionArgs {
            volatility: -0.1,
            ..args()
        };
        assert!(matches!(
            bad.to_request(&CliConfig::default()),
            Err(CliError::Profile(_))
        ));
    }
}
