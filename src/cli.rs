//! CLI interface for the workout calculator.
//!
//! Two commands:
//!
//! - `workout report [--packages <file>]` — process a list of sensor packages.
//! - `workout calc <CODE> <FIELDS>...` — process a single package from argv.
//!
//! Output is one line per workout on stdout: the summary text by default,
//! or a JSON object with `--format json`.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::package::{Package, PackageError};

use format::render;

/// Workout statistics from raw tracker readings.
#[derive(Debug, Parser)]
#[command(name = "workout", after_long_help = CODES_HELP)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

const CODES_HELP: &str = r"Activity codes and fields:
  SWM  action duration weight pool_length lap_count
  RUN  action duration weight
  WLK  action duration weight height

Examples:
  workout report
  workout report --packages week.toml --format json
  workout calc RUN 15000 1 75";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report on every package in a package file.
    ///
    /// Without `--packages`, reads `~/.workout/packages.toml` if present,
    /// otherwise a built-in sample of one workout per activity.
    /// Packages with an unsupported activity code are skipped.
    Report {
        /// Package file (TOML, or JSON when the name ends in `.json`).
        #[arg(long)]
        packages: Option<PathBuf>,
    },

    /// Report on a single package given on the command line.
    Calc {
        /// Activity code: SWM, RUN or WLK.
        code: String,

        /// Readings, in the order listed under activity codes.
        #[arg(required = true, allow_negative_numbers = true)]
        fields: Vec<f64>,
    },
}

/// How each workout is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The summary line.
    Text,
    /// One JSON object per line.
    Json,
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { packages } => {
            let config = Config::load(packages.as_deref())?;
            for line in cmd_report(&config, cli.format)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Calc { code, fields } => {
            let line = cmd_calc(&Package::new(code, fields), cli.format)?;
            println!("{line}");
            Ok(())
        }
    }
}

/// Render every package that maps to a workout.
///
/// An unsupported activity code is not an error here: the package is logged
/// and skipped. Malformed readings for a supported code are.
fn cmd_report(config: &Config, format: OutputFormat) -> Result<Vec<String>, String> {
    let mut lines = Vec::with_capacity(config.packages.len());

    for package in &config.packages {
        let workout = match package.read() {
            Ok(w) => w,
            Err(PackageError::UnknownWorkoutType(code)) => {
                tracing::warn!(code = %code, "skipping package with unsupported workout type");
                continue;
            }
            Err(e) => return Err(format!("package {}: {e}", package.code)),
        };
        lines.push(render(&workout.report(), format)?);
    }

    Ok(lines)
}

fn cmd_calc(package: &Package, format: OutputFormat) -> Result<String, String> {
    let workout = package.read().map_err(|e| e.to_string())?;
    render(&workout.report(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_builtin_packages() {
        let lines = cmd_report(&Config::builtin(), OutputFormat::Text).unwrap();

        assert_eq!(
            lines,
            [
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.",
            ]
        );
    }

    #[test]
    fn report_skips_unknown_codes() {
        let config = Config {
            packages: vec![
                Package::new("BIK", [1000.0, 1.0, 70.0]),
                Package::new("RUN", [15_000.0, 1.0, 75.0]),
            ],
        };

        let lines = cmd_report(&config, OutputFormat::Text).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn report_fails_on_malformed_readings() {
        let config = Config {
            packages: vec![Package::new("RUN", [15_000.0, 1.0])],
        };

        let err = cmd_report(&config, OutputFormat::Text).unwrap_err();
        assert_eq!(err, "package RUN: RUN expects 3 fields, got 2");
    }

    #[test]
    fn calc_unknown_code_is_an_error() {
        let err = cmd_calc(&Package::new("BIK", [1.0, 1.0, 1.0]), OutputFormat::Text).unwrap_err();
        assert_eq!(err, "unsupported workout type: BIK");
    }

    #[test]
    fn calc_json_output() {
        let line = cmd_calc(
            &Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["trainingType"], "Swimming");
        assert_eq!(value["speed"], 1.0);
    }

    #[test]
    fn parses_calc_arguments() {
        let cli = Cli::try_parse_from([
            "workout", "--format", "json", "calc", "WLK", "9000", "1", "75", "180",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Command::Calc { ref code, ref fields } if code == "WLK" && fields.len() == 4
        ));
    }
}
