//! Sensor package dispatch.
//!
//! A package is an activity code plus the readings for that activity, in
//! constructor order:
//!
//! ```text
//! SWM  action, duration, weight, pool_length, lap_count
//! RUN  action, duration, weight
//! WLK  action, duration, weight, height
//! ```

use serde::Deserialize;

use crate::training::{Running, SportsWalking, Swimming, Training};

/// Errors that can occur while turning a package into a workout.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("unsupported workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{code} expects {expected} fields, got {found}")]
    FieldCount {
        code: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("duration is zero; mean speed is undefined")]
    ZeroDuration,
}

pub type Result<T> = core::result::Result<T, PackageError>;

/// One raw sensor reading set, as received from the tracker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Builds the workout this package describes.
    pub fn read(&self) -> Result<Box<dyn Training>> {
        read_package(&self.code, &self.data)
    }
}

/// The supported activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

/// Activity code lookup.
const WORKOUT_TYPES: [(&str, WorkoutType); 3] = [
    ("SWM", WorkoutType::Swimming),
    ("RUN", WorkoutType::Running),
    ("WLK", WorkoutType::SportsWalking),
];

impl WorkoutType {
    /// Looks up an activity code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        WORKOUT_TYPES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, t)| *t)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of positional fields the variant's constructor takes.
    pub fn field_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

/// Turns an activity code and its readings into a workout.
///
/// An unknown code produces no workout: the caller decides whether that is
/// worth skipping or failing over.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let workout_type =
        WorkoutType::from_code(code).ok_or_else(|| PackageError::UnknownWorkoutType(code.into()))?;

    if data.len() != workout_type.field_count() {
        return Err(PackageError::FieldCount {
            code: workout_type.code(),
            expected: workout_type.field_count(),
            found: data.len(),
        });
    }

    let action = whole_count("action", data[0])?;
    let duration = data[1];
    let weight = data[2];
    if duration == 0.0 {
        return Err(PackageError::ZeroDuration);
    }

    tracing::debug!(code, action, duration, weight, "reading package");

    Ok(match workout_type {
        WorkoutType::Running => Box::new(Running::new(action, duration, weight)),
        WorkoutType::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, data[3]))
        }
        WorkoutType::Swimming => {
            let lap_count = whole_count("lap_count", data[4])?;
            Box::new(Swimming::new(action, duration, weight, data[3], lap_count))
        }
    })
}

/// Converts a reading that counts discrete things (steps, strokes, laps).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(PackageError::InvalidCount { field, value });
    }
    Ok(value as u32)
}
