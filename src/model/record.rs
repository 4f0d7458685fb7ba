//! Base sensor readings shared by every workout variant.

/// The readings every workout carries, regardless of activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    /// Steps taken or strokes made.
    pub action: u32,

    /// Duration in hours.
    pub duration: f64,

    /// Body weight in kilograms.
    pub weight: f64,
}

impl WorkoutRecord {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}
