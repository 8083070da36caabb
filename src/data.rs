// ABOUTME: Loading and validating exercise sessions and workout histories from JSON files
// ABOUTME: Rejects malformed documents before they reach the analysis crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_core::errors::{AppError, AppResult};
use fitcoach_core::models::{Exercise, Workout};
use fitcoach_core::validation::{validate_exercises, validate_workout};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        let message = format!("{}: {e}", path.display());
        AppError::from(e).with_message(message)
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Read input file");
    Ok(serde_json::from_str(&raw)?)
}

/// Load a session's exercise summaries from a JSON array
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or fails validation
pub fn load_exercises(path: &Path) -> AppResult<Vec<Exercise>> {
    let exercises: Vec<Exercise> = read_json(path)?;
    validate_exercises(&exercises)?;
    info!(path = %path.display(), count = exercises.len(), "Loaded session exercises");
    Ok(exercises)
}

/// Load a workout history from a JSON array of stored workout documents
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or any workout fails validation
pub fn load_workouts(path: &Path) -> AppResult<Vec<Workout>> {
    let workouts: Vec<Workout> = read_json(path)?;
    for (index, workout) in workouts.iter().enumerate() {
        validate_workout(workout).map_err(|e| {
            let message = format!("workouts[{index}]: {e}");
            AppError::from(e).with_message(message)
        })?;
    }
    info!(path = %path.display(), count = workouts.len(), "Loaded workout history");
    Ok(workouts)
}
