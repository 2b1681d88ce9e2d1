//! Custom error types for the tracker binary.

use thiserror::Error;

/// Errors that stop a batch.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("tracker error: {0}")]
    Tracker(#[from] workout_tracker::TrainingError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
