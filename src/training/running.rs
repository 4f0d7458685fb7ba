//! Running: steps over time.

use crate::model::WorkoutRecord;

use super::{M_IN_KM, MIN_IN_H, Training};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn spent_calories(&self) -> f64 {
        let WorkoutRecord {
            duration, weight, ..
        } = self.record;
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT) * weight
            / M_IN_KM
            * duration
            * MIN_IN_H
    }
}
