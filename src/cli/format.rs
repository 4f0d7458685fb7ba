//! Output formatting for CLI display.

use crate::model::Report;

use super::OutputFormat;

/// Render a report as a single output line.
pub(super) fn render(report: &Report, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string(report).map_err(|e| format!("failed to serialize report: {e}"))
        }
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
    fn text_is_summary_line() {
        let line = render(&sample_report(), OutputFormat::Text).unwrap();
        assert_eq!(line, sample_report().to_string());
    }

    #[test]
    fn json_is_one_line() {
        let line = render(&sample_report(), OutputFormat::Json).unwrap();

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["trainingType"], "Running");
        assert_eq!(value["distance"], 9.75);
    }
}
