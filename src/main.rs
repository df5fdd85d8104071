/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-grade.
 *
 * gear-grade is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-grade is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-grade. If not, see <https://www.gnu.org/licenses/>.
 */

mod cli;
mod settings;

use std::process::ExitCode;
use clap::{CommandFactory, Parser};
use tracing::{error, info, warn, Level};

use gearing::{GearCombination, GearSet, GearSetKind, GearingError};
use crate::cli::Cli;
use crate::settings::Settings;

const USAGE_EXIT_CODE: u8 = 2;

#[derive(thiserror::Error, Debug)]
enum GearGradeError {
    #[error("{0}")]
    Gearing(#[from] GearingError),
    #[error("invalid wheel size `{0}`. Wheel diameter must be a positive number of inches")]
    InvalidWheelSize(f64),
}

impl GearGradeError {
    fn is_usage_error(&self) -> bool {
        match self {
            GearGradeError::Gearing(e) => e.is_usage_error(),
            GearGradeError::InvalidWheelSize(_) => true
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }
}

fn load_settings(cli: &Cli) -> Settings {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings. {}", e.to_string());
            Settings::default()
        }
    };
    settings.with_overrides(cli.wheel_inches, cli.rpms)
}

fn generate_report(cli: &Cli, settings: &Settings) -> Result<String, GearGradeError> {
    if !settings.wheel_inches.is_finite() || settings.wheel_inches <= 0.0 {
        return Err(GearGradeError::InvalidWheelSize(settings.wheel_inches));
    }
    let crankset = GearSet::parse(GearSetKind::Crankset, &cli.crankset)?;
    let cogset = GearSet::parse(GearSetKind::Cogset, &cli.cogset)?;
    info!("Analysing {} chainrings against {} cogs on a {}\" wheel at {}rpm",
          crankset.len(), cogset.len(), settings.wheel_inches, settings.rpms);

    let combination = GearCombination::new(crankset, cogset);
    Ok(combination.output(settings.wheel_inches, settings.rpms)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let settings = load_settings(&cli);
    match generate_report(&cli, &settings) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to generate gear report. {}", e);
            eprintln!("{}", e);
            if e.is_usage_error() {
                let _ = Cli::command().print_help();
                return ExitCode::from(USAGE_EXIT_CODE);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crate::cli::Cli;
    use crate::settings::Settings;
    use crate::{generate_report, GearGradeError};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gear-grade").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn report_for_double_chainset() {
        let cli = cli(&["-c", "50,34", "-o", "11,13,15,17,19,21,23,25"]);
        let report = generate_report(&cli, &Settings::default()).unwrap();
        assert!(report.starts_with("34x25 01.36 09.86mph   \n"));
        assert!(report.contains("50x11 04.55 32.95mph   \n"));
        assert!(report.contains("\nSummary\ngear: 16\n"));
        assert!(report.ends_with("cog 11: -18.18%\n"));
    }

    #[test]
    fn blank_gear_list_is_a_usage_error() {
        let cli = cli(&["-c", "", "-o", "11,13"]);
        let e = generate_report(&cli, &Settings::default()).unwrap_err();
        assert!(e.is_usage_error());
    }

    #[test]
    fn bad_tooth_is_not_a_usage_error() {
        let cli = cli(&["-c", "50,3x", "-o", "11,13"]);
        let e = generate_report(&cli, &Settings::default()).unwrap_err();
        assert!(matches!(e, GearGradeError::Gearing(_)));
        assert!(!e.is_usage_error());
    }

    #[test]
    fn wheel_size_must_be_positive() {
        let cli = cli(&["-c", "50,34", "-o", "11,13"]);
        let settings = Settings::default().with_overrides(Some(0.0), None);
        assert!(matches!(generate_report(&cli, &settings), Err(GearGradeError::InvalidWheelSize(_))));
    }
}
