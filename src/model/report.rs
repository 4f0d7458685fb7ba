//! The summary of a finished workout.

use std::fmt;

use serde::Serialize;

/// Computed statistics for one workout, ready to display.
///
/// `Display` renders the fixed summary line with every number to three
/// decimal places. Serializes with raw, unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub training_type: String,

    /// Hours.
    pub duration: f64,

    /// Kilometers.
    pub distance: f64,

    /// Kilometers per hour.
    pub speed: f64,

    /// Kilocalories.
    pub calories: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            training_type: "Running".into(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 797.805,
        }
    }

    #[test]
    fn renders_summary_line() {
        assert_eq!(
            sample_report().to_string(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn always_three_fractional_digits() {
        let report = Report {
            training_type: "Swimming".into(),
            duration: 12_345.678_9,
            distance: 0.0,
            speed: 0.000_49,
            calories: 1e9,
        };
        assert_eq!(
            report.to_string(),
            "Тип тренировки: Swimming; Длительность: 12345.679 ч.; Дистанция: 0.000 км; \
             Ср. скорость: 0.000 км/ч; Потрачено ккал: 1000000000.000."
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["trainingType"], "Running");
        assert_eq!(json["calories"], 797.805);
    }
}
