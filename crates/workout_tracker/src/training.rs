//! Per-activity calculators.
//!
//! Every activity shares the raw fields in [`TrainingBase`] and the default
//! distance and speed formulas on [`Workout`]. Variants supply their own
//! calorie formula and may override the rest.

use crate::message::InfoMessage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const HOUR_MIN: f64 = 60.0;

/// Raw readings common to every activity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

pub trait Workout {
    /// Meters covered per action.
    const LEN_STEP: f64 = 0.65;

    /// Name shown in reports.
    const NAME: &'static str;

    fn base(&self) -> &TrainingBase;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.base().action) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    fn calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::NAME.to_string(),
            duration: self.base().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const RUN_CAL_1: f64 = 18.0;
    const RUN_CAL_2: f64 = 20.0;

    pub fn new(base: TrainingBase) -> Self {
        Self { base }
    }
}

impl Workout for Running {
    const NAME: &'static str = "Running";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn calories(&self) -> f64 {
        (Self::RUN_CAL_1 * self.mean_speed() - Self::RUN_CAL_2) * self.base.weight / M_IN_KM
            * self.base.duration
            * HOUR_MIN
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimeters.
    pub height: f64,
}

impl SportsWalking {
    const WLK_CAL_1: f64 = 0.035;
    const WLK_CAL_2: f64 = 0.029;

    pub fn new(base: TrainingBase, height: f64) -> Self {
        Self { base, height }
    }
}

impl Workout for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn calories(&self) -> f64 {
        // floor division: reference outputs depend on the truncation
        let speed_term = (self.mean_speed().powi(2) / self.height).floor();
        (Self::WLK_CAL_1 * self.base.weight + speed_term * Self::WLK_CAL_2 * self.base.weight)
            * self.base.duration
            * HOUR_MIN
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Meters.
    pub length_pool: f64,
    pub count_pool: f64,
}

impl Swimming {
    const SWM_CAL_1: f64 = 1.1;
    const SWM_CAL_2: f64 = 2.0;

    pub fn new(base: TrainingBase, length_pool: f64, count_pool: f64) -> Self {
        Self {
            base,
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    const LEN_STEP: f64 = 1.38;
    const NAME: &'static str = "Swimming";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.base.duration
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::SWM_CAL_1) * Self::SWM_CAL_2 * self.base.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn running_sample() {
        let run = Running::new(TrainingBase::new(15000, 1.0, 75.0));
        assert!(close(run.distance(), 9.75));
        assert!(close(run.mean_speed(), 9.75));
        assert!(close(run.calories(), 699.75));
    }

    #[test]
    fn walking_floors_speed_term() {
        let walk = SportsWalking::new(TrainingBase::new(9000, 1.0, 75.0), 180.0);
        assert!(close(walk.distance(), 5.85));
        assert!(close(walk.mean_speed(), 5.85));
        // 5.85^2 / 180 = 0.19, floored to 0
        assert!(close(walk.calories(), 157.5));
    }

    #[test]
    fn walking_speed_term_counts_whole_units() {
        // 13 km/h: 169 / 100 = 1.69 -> 1
        let walk = SportsWalking::new(TrainingBase::new(20000, 1.0, 70.0), 100.0);
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        assert!(close(walk.calories(), expected));
    }

    #[test]
    fn swimming_uses_pool_speed() {
        let swim = Swimming::new(TrainingBase::new(720, 1.0, 80.0), 25.0, 40.0);
        assert!(close(swim.distance(), 0.9936));
        assert!(close(swim.mean_speed(), 1.0));
        assert!(close(swim.calories(), 336.0));
    }

    #[test]
    fn running_calories_can_go_negative() {
        let run = Running::new(TrainingBase::new(100, 1.0, 75.0));
        assert!(run.calories() < 0.0);
    }

    #[test]
    fn distance_and_speed_are_repeatable() {
        let run = Running::new(TrainingBase::new(12345, 1.5, 60.0));
        assert_eq!(run.distance().to_bits(), run.distance().to_bits());
        assert_eq!(run.mean_speed().to_bits(), run.mean_speed().to_bits());
    }

    #[test]
    fn show_training_info_carries_name_and_duration() {
        let info = Swimming::new(TrainingBase::new(720, 2.0, 80.0), 25.0, 40.0).show_training_info();
        assert_eq!(info.training_type, "Swimming");
        assert_eq!(info.duration, 2.0);
        assert!(close(info.speed, 0.5));
    }
}
