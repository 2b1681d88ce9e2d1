use std::fmt;

use serde::Serialize;

use crate::TrainingResult;

/// Summary of a finished workout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Single-line JSON rendering of the same values.
    pub fn to_json_line(&self) -> TrainingResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
