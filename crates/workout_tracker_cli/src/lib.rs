//! Batch driver: dispatch, calculate and report each package in turn.

use std::io::Write;

use workout_tracker::Package;
use workout_tracker::config::{Config, OutputFormat};
use workout_tracker::package::{load_packages, sample_packages};

mod error;

pub use error::{CliError, CliResult};

/// Default tracing filter used when the configured one does not parse.
pub const FALLBACK_LOG_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Build the tracing filter, falling back to [`FALLBACK_LOG_FILTER`].
pub fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(FALLBACK_LOG_FILTER))
}

/// Packages named by the config, or the built-in samples.
pub fn packages_for(config: &Config) -> CliResult<Vec<Package>> {
    match &config.packages_path {
        Some(path) => Ok(load_packages(path)?),
        None => Ok(sample_packages()),
    }
}

/// Write one line per package to `out`.
///
/// A package that fails to dispatch produces an `Error: ...` line and the
/// batch moves on; only write failures abort.
pub fn run_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> CliResult<BatchSummary> {
    let mut summary = BatchSummary::default();
    for package in packages {
        match package.read() {
            Ok(training) => {
                let info = training.show_training_info();
                tracing::debug!(
                    activity = %training.code(),
                    distance = info.distance,
                    speed = info.speed,
                    calories = info.calories,
                    "workout computed"
                );
                let line = match format {
                    OutputFormat::Text => info.get_message(),
                    OutputFormat::Json => info.to_json_line()?,
                };
                writeln!(out, "{line}")?;
                summary.processed += 1;
            }
            Err(e) => {
                tracing::warn!(workout_type = %package.workout_type, "package rejected: {e}");
                writeln!(out, "Error: {e}")?;
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
