//! Simulation request: the position and market parameters to simulate.

use crate::error::{ProfileError, Result};

/// Calendar days per year used to convert days-to-expiry into year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Default number of independent simulation trials.
pub const DEFAULT_PATH_COUNT: usize = 10_000;

/// Option side, used to map the below-strike fraction onto ITM/OTM.
///
/// A put finishes in the money below the strike; a call finishes in the
/// money at or above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Put option: in the money when the terminal price is below strike.
    #[default]
    Put,
    /// Call option: in the money when the terminal price is at or above strike.
    Call,
}

impl OptionSide {
    /// Splits a below-strike fraction into `(itm, otm)` for this side.
    #[inline]
    pub fn split(self, below: f64, at_or_above: f64) -> (f64, f64) {
        match self {
            OptionSide::Put => (below, at_or_above),
            OptionSide::Call => (at_or_above, below),
        }
    }
}

impl std::str::FromStr for OptionSide {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "put" | "p" => Ok(OptionSide::Put),
            "call" | "c" => Ok(OptionSide::Call),
            other => Err(ProfileError::invalid(
                "side",
                format!("expected 'put' or 'call', got '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionSide::Put => write!(f, "put"),
            OptionSide::Call => write!(f, "call"),
        }
    }
}

/// Parameters of a single price-risk simulation.
///
/// # Model
///
/// The underlying follows Geometric Brownian Motion under the risk-neutral
/// measure:
/// ```text
/// dS = r S dt + σ S dW
/// ```
/// stepped once per calendar day until expiry.
///
/// # Examples
///
/// ```rust
/// use pricer_profile::request::{OptionSide, SimulationRequest};
///
/// let request = SimulationRequest::builder()
///     .spot(100.0)
///     .strike(95.0)
///     .days_to_expiry(30)
///     .volatility(0.30)
///     .risk_free_rate(0.045)
///     .side(OptionSide::Put)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path_count, 10_000);
/// assert_eq!(request.steps(), 30);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationRequest {
    /// Current underlying price.
    pub spot: f64,
    /// Option strike price.
    pub strike: f64,
    /// Calendar days until expiry.
    pub days_to_expiry: u32,
    /// Annualised volatility (σ).
    pub volatility: f64,
    /// Annualised risk-free rate (r).
    pub risk_free_rate: f64,
    /// Number of independent trials.
    pub path_count: usize,
    /// Side used for the ITM/OTM mapping.
    pub side: OptionSide,
}

impl SimulationRequest {
    /// Creates a request with the default path count and put side.
    ///
    /// The request is not validated here; [`validate`](Self::validate) runs
    /// when it is simulated.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        days_to_expiry: u32,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            days_to_expiry,
            volatility,
            risk_free_rate,
            path_count: DEFAULT_PATH_COUNT,
            side: OptionSide::Put,
        }
    }

    /// Creates a new request builder.
    #[inline]
    pub fn builder() -> SimulationRequestBuilder {
        SimulationRequestBuilder::default()
    }

    /// Returns a copy with a different path count.
    #[inline]
    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    /// Returns a copy with a different option side.
    #[inline]
    pub fn with_side(mut self, side: OptionSide) -> Self {
        self.side = side;
        self
    }

    /// Number of daily simulation steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.days_to_expiry as usize
    }

    /// Time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        f64::from(self.days_to_expiry) / DAYS_PER_YEAR
    }

    /// One-standard-deviation move to expiry: `spot × σ × sqrt(T)`.
    #[inline]
    pub fn expected_move(&self) -> f64 {
        self.spot * self.volatility * self.maturity().sqrt()
    }

    /// Validates every field, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the offending field when:
    /// - `spot` or `strike` is not a positive finite number
    /// - `days_to_expiry` is 0
    /// - `volatility` is negative or not finite
    /// - `risk_free_rate` is not finite
    /// - `path_count` is 0
    pub fn validate(&self) -> Result<()> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(ProfileError::invalid(
                "spot",
                format!("must be a positive finite number, got {}", self.spot),
            ));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(ProfileError::invalid(
                "strike",
                format!("must be a positive finite number, got {}", self.strike),
            ));
        }
        if self.days_to_expiry == 0 {
            return Err(ProfileError::invalid("days_to_expiry", "must be at least 1"));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(ProfileError::invalid(
                "volatility",
                format!("must be a non-negative finite number, got {}", self.volatility),
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ProfileError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }
        if self.path_count == 0 {
            return Err(ProfileError::invalid("path_count", "must be at least 1"));
        }
        Ok(())
    }
}

/// Builder for [`SimulationRequest`].
///
/// `spot`, `strike`, `days_to_expiry` and `volatility` must be set;
/// `risk_free_rate` defaults to 0, `path_count` to 10,000 and `side` to put.
#[derive(Clone, Debug, Default)]
pub struct SimulationRequestBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    days_to_expiry: Option<u32>,
    volatility: Option<f64>,
    risk_free_rate: Option<f64>,
    path_count: Option<usize>,
    side: OptionSide,
}

impl SimulationRequestBuilder {
    /// Sets the current underlying price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the calendar days to expiry.
    #[inline]
    pub fn days_to_expiry(mut self, days: u32) -> Self {
        self.days_to_expiry = Some(days);
        self
    }

    /// Sets the annualised volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the annualised risk-free rate.
    #[inline]
    pub fn risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }

    /// Sets the number of trials.
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = Some(path_count);
        self
    }

    /// Sets the option side.
    #[inline]
    pub fn side(mut self, side: OptionSide) -> Self {
        self.side = side;
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a required field is missing or any
    /// field fails [`SimulationRequest::validate`].
    pub fn build(self) -> Result<SimulationRequest> {
        let request = SimulationRequest {
            spot: self.spot.ok_or_else(|| missing("spot"))?,
            strike: self.strike.ok_or_else(|| missing("strike"))?,
            days_to_expiry: self
                .days_to_expiry
                .ok_or_else(|| missing("days_to_expiry"))?,
            volatility: self.volatility.ok_or_else(|| missing("volatility"))?,
            risk_free_rate: self.risk_free_rate.unwrap_or(0.0),
            path_count: self.path_count.unwrap_or(DEFAULT_PATH_COUNT),
            side: self.side,
        };

        request.validate()?;
        Ok(request)
    }
}

fn missing(field: &'static str) -> ProfileError {
    ProfileError::invalid(field, "must be specified")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> SimulationRequest {
        SimulationRequest::new(100.0, 95.0, 30, 0.30, 0.045)
    }

    fn field_of(request: SimulationRequest) -> Option<&'static str> {
        request.validate().err().and_then(|e| e.field())
    }

    #[test]
    fn test_new_defaults() {
        let request = base();
        assert_eq!(request.path_count, DEFAULT_PATH_COUNT);
        assert_eq!(request.side, OptionSide::Put);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_derived_quantities() {
        let request = base();
        assert_eq!(request.steps(), 30);
        assert_relative_eq!(request.maturity(), 30.0 / 365.0, epsilon = 1e-15);
        // 100 × 0.30 × sqrt(30/365) ≈ 8.6
        assert_relative_eq!(request.expected_move(), 8.6007, epsilon = 1e-3);
    }

    #[test]
    fn test_validation_names_offending_field() {
        let mut r = base();
        r.spot = 0.0;
        assert_eq!(field_of(r), Some("spot"));

        let mut r = base();
        r.spot = f64::NAN;
        assert_eq!(field_of(r), Some("spot"));

        let mut r = base();
        r.strike = -5.0;
        assert_eq!(field_of(r), Some("strike"));

        let mut r = base();
        r.days_to_expiry = 0;
        assert_eq!(field_of(r), Some("days_to_expiry"));

        let mut r = base();
        r.volatility = -0.01;
        assert_eq!(field_of(r), Some("volatility"));

        let mut r = base();
        r.risk_free_rate = f64::INFINITY;
        assert_eq!(field_of(r), Some("risk_free_rate"));

        assert_eq!(field_of(base().with_path_count(0)), Some("path_count"));
    }

    #[test]
    fn test_large_path_count_is_not_capped() {
        let request = SimulationRequest::new(100.0, 95.0, 1, 0.3, 0.0).with_path_count(10_000_001);
        assert!(request.validate().is_ok());
        assert_eq!(request.path_count, 10_000_001);
        assert!(base().with_path_count(usize::MAX).validate().is_ok());
    }

    #[test]
    fn test_zero_volatility_and_negative_rate_are_valid() {
        let mut r = base();
        r.volatility = 0.0;
        r.risk_free_rate = -0.01;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = SimulationRequest::builder()
            .strike(95.0)
            .days_to_expiry(30)
            .volatility(0.2)
            .build();
        assert!(matches!(
            result,
            Err(ProfileError::InvalidParameter { field: "spot", .. })
        ));

        let result = SimulationRequest::builder()
            .spot(100.0)
            .strike(95.0)
            .volatility(0.2)
            .build();
        assert!(matches!(
            result,
            Err(ProfileError::InvalidParameter {
                field: "days_to_expiry",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let request = SimulationRequest::builder()
            .spot(50.0)
            .strike(55.0)
            .days_to_expiry(7)
            .volatility(0.5)
            .build()
            .unwrap();
        assert_eq!(request.risk_free_rate, 0.0);
        assert_eq!(request.path_count, DEFAULT_PATH_COUNT);
        assert_eq!(request.side, OptionSide::Put);
    }

    #[test]
    fn test_option_side_split_and_parse() {
        assert_eq!(OptionSide::Put.split(0.3, 0.7), (0.3, 0.7));
        assert_eq!(OptionSide::Call.split(0.3, 0.7), (0.7, 0.3));

        assert_eq!("CALL".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("p".parse::<OptionSide>().unwrap(), OptionSide::Put);
        assert!("straddle".parse::<OptionSide>().is_err());
        assert_eq!(OptionSide::Call.to_string(), "call");
    }
}
