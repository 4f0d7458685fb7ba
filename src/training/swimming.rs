//! Swimming: strokes for distance, pool laps for speed.

use crate::model::WorkoutRecord;

use super::{M_IN_KM, Training};

/// Meters covered by one stroke.
const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,

    /// Meters.
    pool_length: f64,

    /// Laps swum.
    lap_count: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, pool_length: f64, lap_count: u32) -> Self {
        Self {
            record: WorkoutRecord::new(action, duration, weight),
            pool_length,
            lap_count,
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Pool geometry, not strokes, determines how far the swimmer went.
    fn mean_speed(&self) -> f64 {
        self.pool_length * f64::from(self.lap_count) / M_IN_KM / self.record.duration
    }

    fn spent_calories(&self) -> f64 {
        let WorkoutRecord {
            duration, weight, ..
        } = self.record;
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_MEAN_SPEED_MULTIPLIER
            * weight
            * duration
    }
}
