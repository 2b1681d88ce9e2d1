//! Workout statistics from raw sensor packages.
//!
//! A package is an activity code plus an ordered list of numbers. The
//! dispatcher in [`dispatch`] turns it into a [`Training`], whose
//! [`Workout`] methods derive distance, mean speed and calories. The result
//! is bundled into an [`InfoMessage`] for display.

use thiserror::Error;

pub mod config;
pub mod dispatch;
pub mod message;
pub mod package;
pub mod training;

pub use dispatch::{ActivityCode, Training, read_package};
pub use message::InfoMessage;
pub use package::Package;
pub use training::{Running, SportsWalking, Swimming, TrainingBase, Workout};

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unsupported activity: {0}")]
    UnsupportedActivity(String),
    #[error("{activity} expects {expected} fields, got {actual}")]
    FieldCount {
        activity: ActivityCode,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TrainingResult<T> = Result<T, TrainingError>;
