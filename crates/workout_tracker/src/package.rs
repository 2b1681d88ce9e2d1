//! Raw input packages and where they come from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::{Training, read_package};
use crate::TrainingResult;

/// One activity code with its raw sensor fields.
///
/// The code is kept as a plain string so unknown activities survive loading
/// and are reported by the dispatcher instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> TrainingResult<Training> {
        read_package(&self.workout_type, &self.data)
    }
}

/// The readings the tracker ships with.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages.
pub fn parse_packages(json: &str) -> TrainingResult<Vec<Package>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_packages(path: &Path) -> TrainingResult<Vec<Package>> {
    let raw = std::fs::read_to_string(path)?;
    let packages = parse_packages(&raw)?;
    tracing::debug!(path = %path.display(), count = packages.len(), "loaded packages");
    Ok(packages)
}
