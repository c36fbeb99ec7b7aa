//! CLI error type.

use pricer_profile::ProfileError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the request or failed during analysis.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    Config(String),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The probability cone could not be written as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
