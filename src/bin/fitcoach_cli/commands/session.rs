// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Session commands for fitcoach-cli
// ABOUTME: Builds session reports from exercise files and single one-rep max estimates

use crate::helpers::display;
use fitcoach::config::ReportConfig;
use fitcoach::data::load_exercises;
use fitcoach::errors::AppResult;
use fitcoach::metrics::estimate_one_rep_max;
use fitcoach::report::{round_to, SessionReport};
use serde_json::json;
use std::path::Path;

/// Print the metrics report for one session file
pub fn report(
    file: &Path,
    duration: Option<f64>,
    config: &ReportConfig,
    as_json: bool,
) -> AppResult<()> {
    let exercises = load_exercises(file)?;
    let report = SessionReport::from_exercises(&exercises, duration, config);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::display_session_report(&report);
    }
    Ok(())
}

/// Print an Epley estimate for a single lift
pub fn one_rep_max(weight: f64, reps: u32, config: &ReportConfig, as_json: bool) -> AppResult<()> {
    let estimate = round_to(
        config
            .weight_unit
            .convert_pounds(estimate_one_rep_max(weight, reps)),
        config.precision,
    );

    if as_json {
        let body = json!({
            "weight": weight,
            "reps": reps,
            "estimate": estimate,
            "unit": config.weight_unit,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!(
            "Estimated 1RM for {weight} lb x {reps}: {estimate} {}",
            config.weight_unit
        );
    }
    Ok(())
}
