// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: History commands for fitcoach-cli
// ABOUTME: Progress tracking and muscle-group/date filtering over workout history files

use crate::helpers::display;
use chrono::{NaiveDate, Utc};
use fitcoach::constants::MUSCLE_GROUPS;
use fitcoach::data::load_workouts;
use fitcoach::errors::AppResult;
use fitcoach::history::{HistoryStats, WorkoutFilters};
use fitcoach::models::Workout;
use fitcoach::progress::ProgressTracker;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryOutput<'a> {
    filters: &'a WorkoutFilters,
    workouts: Vec<&'a Workout>,
    stats: HistoryStats,
}

/// Print per-exercise progress for a history file
pub fn progress(file: &Path, as_json: bool) -> AppResult<()> {
    let workouts = load_workouts(file)?;
    let report = ProgressTracker::analyze(&workouts);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::display_progress_report(&report);
    }
    Ok(())
}

/// Print the filtered history and whole-history counters
pub fn filter(
    file: &Path,
    muscle_group: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    as_json: bool,
) -> AppResult<()> {
    if let Some(group) = muscle_group.as_deref() {
        if !MUSCLE_GROUPS.contains(&group) {
            warn!(muscle_group = group, "Muscle group is not in the standard catalogue");
        }
    }

    let workouts = load_workouts(file)?;
    let filters = WorkoutFilters::from_dates(muscle_group, from, to);

    let matched = filters.apply(&workouts);
    let stats = HistoryStats::compute(&workouts, Utc::now());
    info!(
        total = workouts.len(),
        matched = matched.len(),
        "Filtered workout history"
    );

    if as_json {
        let output = HistoryOutput {
            filters: &filters,
            workouts: matched,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display::display_history(&matched, &stats);
    }
    Ok(())
}
