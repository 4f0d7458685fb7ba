//! Core data model for workouts.
//!
//! Raw sensor readings go in as a [`WorkoutRecord`], computed statistics come
//! out as a [`Report`]. Both are plain values: nothing is cached or persisted.

mod record;
mod report;

pub use record::WorkoutRecord;
pub use report::Report;
