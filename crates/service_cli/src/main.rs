//! Pricer Profile CLI - Price-risk profiles for single option positions
//!
//! Simulates the underlying with geometric Brownian motion and reports the
//! distribution of terminal prices together with the probability cone.
//!
//! # Commands
//!
//! - `pricer_profile run --spot <S> --strike <K> --days <D> --volatility <V>` - Print the risk profile
//! - `pricer_profile cone --spot <S> --strike <K> --days <D> --volatility <V>` - Emit percentile bands as CSV
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over `--verbose`.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::run::OutputFormat;
use commands::PositionArgs;
use config::CliConfig;

/// Pricer Profile CLI
#[derive(Parser)]
#[command(name = "pricer_profile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "profile.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a position and print its terminal-price risk profile
    Run {
        #[command(flatten)]
        position: PositionArgs,

        /// Number of histogram bins (overrides the config file)
        #[arg(long)]
        bins: Option<usize>,

        /// Output format (json, table)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Write the per-step percentile bands as CSV
    Cone {
        #[command(flatten)]
        position: PositionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load_or_default(Path::new(&cli.config))?;

    match cli.command {
        Commands::Run {
            position,
            bins,
            format,
        } => commands::run::run(&position, bins, format, &config),
        Commands::Cone { position } => commands::cone::run(&position, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_profile::OptionSide;

    #[test]
    fn test_parse_run_with_flags() {
        let cli = Cli::try_parse_from([
            "pricer_profile",
            "--verbose",
            "run",
            "--spot",
            "100",
            "--strike",
            "95",
            "--days",
            "30",
            "--volatility",
            "0.3",
            "--side",
            "call",
            "--seed",
            "7",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, "profile.toml");
        match cli.command {
            Commands::Run {
                position,
                bins,
                format,
            } => {
                assert_eq!(position.spot, 100.0);
                assert_eq!(position.days, 30);
                assert_eq!(position.rate, 0.0);
                assert_eq!(position.side, OptionSide::Call);
                assert_eq!(position.seed, Some(7));
                assert_eq!(bins, None);
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::Cone { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_side() {
        let result = Cli::try_parse_from([
            "pricer_profile",
            "cone",
            "--spot",
            "100",
            "--strike",
            "95",
            "--days",
            "30",
            "--volatility",
            "0.3",
            "--side",
            "straddle",
        ]);
        assert!(result.is_err());
    }
}
