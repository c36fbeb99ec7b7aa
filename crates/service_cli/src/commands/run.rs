//! Run command implementation
//!
//! Simulates one position and prints its full risk profile.

use std::io::Write;

use clap::ValueEnum;
use pricer_profile::RiskProfile;
use tracing::info;

use super::PositionArgs;
use crate::config::CliConfig;
use crate::Result;

/// Width of the longest histogram bar in table output.
const BAR_WIDTH: usize = 40;

/// Output format for the `run` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON of the whole profile
    Json,
    /// Human-readable summary with a text histogram
    #[default]
    Table,
}

/// Execute the run command
pub fn run(
    args: &PositionArgs,
    bins: Option<usize>,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<()> {
    let request = args.to_request(config)?;
    let sim_config = config.simulation_config(bins, args.seed)?;

    info!(
        spot = request.spot,
        strike = request.strike,
        days = request.days_to_expiry,
        paths = request.path_count,
        "Running risk profile"
    );

    let profile = RiskProfile::compute(&request, &sim_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&profile, format, &mut out)?;
    out.flush()?;

    info!("Risk profile complete");
    Ok(())
}

/// Writes `profile` to `out` in the requested format.
pub fn render<W: Write>(profile: &RiskProfile, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, profile)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(profile, out)?,
    }
    Ok(())
}

fn write_table<W: Write>(profile: &RiskProfile, out: &mut W) -> std::io::Result<()> {
    let request = &profile.request;
    let stats = &profile.stats;

    writeln!(out, "Position")?;
    writeln!(out, "  spot            {:>12.4}", request.spot)?;
    writeln!(out, "  strike          {:>12.4}", request.strike)?;
    writeln!(out, "  side            {:>12}", request.side)?;
    writeln!(out, "  days to expiry  {:>12}", request.days_to_expiry)?;
    writeln!(out, "  volatility      {:>12.4}", request.volatility)?;
    writeln!(out, "  rate            {:>12.4}", request.risk_free_rate)?;
    writeln!(out, "  paths           {:>12}", request.path_count)?;
    writeln!(out)?;

    writeln!(out, "Terminal distribution")?;
    writeln!(out, "  mean            {:>12.4}", stats.mean)?;
    writeln!(out, "  median          {:>12.4}", stats.median)?;
    writeln!(out, "  std dev         {:>12.4}", stats.std_dev)?;
    writeln!(out, "  min             {:>12.4}", stats.min)?;
    writeln!(out, "  max             {:>12.4}", stats.max)?;
    writeln!(out, "  expected move   {:>12.4}", stats.expected_move)?;
    for (label, value) in &stats.percentiles {
        writeln!(out, "  p{:<15}{:>12.4}", label, value)?;
    }
    writeln!(out)?;

    writeln!(out, "Moneyness at expiry")?;
    writeln!(out, "  below strike    {:>11.2}%", stats.below_strike_fraction * 100.0)?;
    writeln!(out, "  at/above strike {:>11.2}%", stats.above_strike_fraction * 100.0)?;
    writeln!(out, "  in the money    {:>11.2}%", stats.itm_fraction * 100.0)?;
    writeln!(out, "  out of money    {:>11.2}%", stats.otm_fraction * 100.0)?;
    writeln!(out)?;

    writeln!(out, "Histogram")?;
    let peak = profile
        .histogram
        .mode_bin()
        .map(|bin| bin.count)
        .unwrap_or(0)
        .max(1);
    for bin in &profile.histogram.bins {
        let bar = "#".repeat(bin.count * BAR_WIDTH / peak);
        writeln!(
            out,
            "  [{:>10.4}, {:>10.4}) {:>8} {}",
            bin.lower, bin.upper, bin.count, bar
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_profile::{SimulationConfig, SimulationRequest};

    fn profile() -> RiskProfile {
        let config = SimulationConfig::builder()
            .seed(42)
            .bin_count(10)
            .build()
            .unwrap();
        let request = SimulationRequest::new(100.0, 95.0, 10, 0.3, 0.0).with_path_count(500);
        RiskProfile::compute(&request, &config).unwrap()
    }

    #[test]
    fn test_json_round_trips() {
        let profile = profile();
        let mut buffer = Vec::new();
        render(&profile, OutputFormat::Json, &mut buffer).unwrap();

        let parsed: RiskProfile = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.histogram.len(), 10);
        assert_eq!(parsed.stats.sample_count, 500);
        assert_eq!(parsed.request, profile.request);
    }

    #[test]
    fn test_table_lists_every_bin() {
        let mut buffer = Vec::new();
        render(&profile(), OutputFormat::Table, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Terminal distribution"));
        assert!(text.contains("in the money"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with('[')).count(), 10);
    }
}
