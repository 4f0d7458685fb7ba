//! Sports walking: steps over time, with height factored into calories.

use crate::model::WorkoutRecord;

use super::{MIN_IN_H, Training};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// km/h to m/s.
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,

    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn spent_calories(&self) -> f64 {
        let WorkoutRecord {
            duration, weight, ..
        } = self.record;
        let speed_m_per_s = self.mean_speed() * KMH_IN_MSEC;
        let height_m = self.height / CM_IN_M;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_m_per_s.powi(2) / height_m * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_H
    }
}
