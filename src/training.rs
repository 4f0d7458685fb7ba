//! The workout contract and its three variants.
//!
//! Every variant derives distance, mean speed and calories from its own
//! readings. Distance and speed have shared defaults built on a per-variant
//! step length; calories are always variant-specific.

mod running;
mod swimming;
mod walking;

use std::fmt;

use crate::model::{Report, WorkoutRecord};

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Meters covered by one step.
pub const LEN_STEP: f64 = 0.65;

/// Statistics every workout variant can compute.
///
/// All methods are pure functions of the variant's readings, so calling
/// them repeatedly or in any order yields the same values.
pub trait Training: fmt::Debug {
    /// Display name used in reports.
    fn name(&self) -> &'static str;

    /// The base readings.
    fn record(&self) -> &WorkoutRecord;

    /// Meters covered per action (step or stroke).
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        f64::from(self.record().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in kilometers per hour.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.record().duration
    }

    /// Calories burned, in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Summary of this workout's statistics.
    fn report(&self) -> Report {
        Report {
            training_type: self.name().to_string(),
            duration: self.record().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
