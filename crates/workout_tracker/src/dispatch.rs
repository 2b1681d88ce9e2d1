//! Activity codes and construction of calculators from raw packages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::message::InfoMessage;
use crate::training::{Running, SportsWalking, Swimming, TrainingBase, Workout};
use crate::{TrainingError, TrainingResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [
        ActivityCode::Swimming,
        ActivityCode::Running,
        ActivityCode::Walking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCode::Swimming => "SWM",
            ActivityCode::Running => "RUN",
            ActivityCode::Walking => "WLK",
        }
    }

    /// Number of raw fields a package for this activity carries.
    pub fn field_count(self) -> usize {
        match self {
            ActivityCode::Running => 3,
            ActivityCode::Walking => 4,
            ActivityCode::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| TrainingError::UnsupportedActivity(s.to_string()))
    }
}

/// A calculator built by [`read_package`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn code(&self) -> ActivityCode {
        match self {
            Training::Running(_) => ActivityCode::Running,
            Training::SportsWalking(_) => ActivityCode::Walking,
            Training::Swimming(_) => ActivityCode::Swimming,
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Training::Running(t) => t.distance(),
            Training::SportsWalking(t) => t.distance(),
            Training::Swimming(t) => t.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Running(t) => t.mean_speed(),
            Training::SportsWalking(t) => t.mean_speed(),
            Training::Swimming(t) => t.mean_speed(),
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            Training::Running(t) => t.calories(),
            Training::SportsWalking(t) => t.calories(),
            Training::Swimming(t) => t.calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Training::Running(t) => t.show_training_info(),
            Training::SportsWalking(t) => t.show_training_info(),
            Training::Swimming(t) => t.show_training_info(),
        }
    }
}

/// Build the calculator for `workout_type` from its raw sensor fields.
///
/// Field order is `action, duration, weight`, followed by `height` for
/// walking or `length_pool, count_pool` for swimming.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrainingResult<Training> {
    let code: ActivityCode = workout_type.parse()?;
    if data.len() != code.field_count() {
        return Err(TrainingError::FieldCount {
            activity: code,
            expected: code.field_count(),
            actual: data.len(),
        });
    }

    let base = TrainingBase::new(
        whole_count("action", data[0])?,
        positive("duration", data[1])?,
        data[2],
    );
    let training = match code {
        ActivityCode::Running => Training::Running(Running::new(base)),
        ActivityCode::Walking => {
            Training::SportsWalking(SportsWalking::new(base, positive("height", data[3])?))
        }
        ActivityCode::Swimming => Training::Swimming(Swimming::new(base, data[3], data[4])),
    };
    tracing::trace!(activity = %code, ?training, "package read");
    Ok(training)
}

fn whole_count(field: &'static str, value: f64) -> TrainingResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidField { field, value })
    }
}

// Used as a divisor, so zero is rejected too.
fn positive(field: &'static str, value: f64) -> TrainingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidField { field, value })
    }
}
