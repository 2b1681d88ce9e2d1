use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::TrainingError;

/// How each report line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrainingError::Config(format!(
                "WORKOUT_TRACKER_OUTPUT must be text or json, got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: String,
    /// Package file; the built-in samples are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, TrainingError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrainingError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("WORKOUT_TRACKER_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        let packages_path = get("WORKOUT_TRACKER_PACKAGES")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let output = match get("WORKOUT_TRACKER_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            log_level,
            packages_path,
            output,
        })
    }
}
