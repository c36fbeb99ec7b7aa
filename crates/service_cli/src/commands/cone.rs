//! Cone command implementation
//!
//! Writes the per-step percentile bands of the sampled paths as CSV.

use std::io::Write;

use pricer_profile::analysis::{DistributionAnalyzer, PercentileBandSeries};
use pricer_profile::simulation::PathSimulator;
use tracing::info;

use super::PositionArgs;
use crate::config::CliConfig;
use crate::Result;

/// Execute the cone command
pub fn run(args: &PositionArgs, config: &CliConfig) -> Result<()> {
    let request = args.to_request(config)?;
    let sim_config = config.simulation_config(None, args.seed)?;

    info!(
        days = request.days_to_expiry,
        paths = request.path_count,
        sampled = sim_config.sampled_path_limit(),
        "Building probability cone"
    );

    let result = PathSimulator::new(sim_config).simulate_seeded(&request)?;
    let bands = DistributionAnalyzer::default().build_percentile_bands(&result)?;

    let stdout = std::io::stdout();
    write_csv(&bands, stdout.lock())?;

    info!(steps = bands.len(), "Probability cone complete");
    Ok(())
}

/// Writes one CSV row per time step: `step,p5,p25,p50,p75,p95`.
pub fn write_csv<W: Write>(bands: &PercentileBandSeries, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["step", "p5", "p25", "p50", "p75", "p95"])?;

    for step in 0..bands.len() {
        writer.serialize((
            step,
            bands.p5[step],
            bands.p25[step],
            bands.p50[step],
            bands.p75[step],
            bands.p95[step],
        ))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_has_header_and_one_row_per_step() {
        let bands = PercentileBandSeries {
            p5: vec![100.0, 90.0],
            p25: vec![100.0, 95.0],
            p50: vec![100.0, 100.0],
            p75: vec![100.0, 105.0],
            p95: vec![100.0, 110.5],
        };

        let mut buffer = Vec::new();
        write_csv(&bands, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "step,p5,p25,p50,p75,p95");
        assert_eq!(lines[1], "0,100.0,100.0,100.0,100.0,100.0");
        assert_eq!(lines[2], "1,90.0,95.0,100.0,105.0,110.5");
    }
}
