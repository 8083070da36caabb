// ABOUTME: Schema validation for exercise summaries and logged workout documents
// ABOUTME: Rejects blank names and negative or non-finite loads before data reaches analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Schema validation.
//!
//! The metrics functions accept any input and degrade to `0`; callers that
//! need strict data run it through these checks first. Each check stops at the
//! first failure and reports the path of the offending field.

use crate::errors::ValidationError;
use crate::models::{CreateWorkout, Exercise, ExerciseSet, LoggedExercise, Workout};
use tracing::warn;

fn require_text(value: &str, field: impl FnOnce() -> String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: field() });
    }
    Ok(())
}

fn require_non_negative(value: f64, field: impl FnOnce() -> String) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field: field() });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate a flat exercise summary
///
/// # Errors
/// Returns an error if the name is blank or the weight is negative or non-finite
pub fn validate_exercise(exercise: &Exercise) -> Result<(), ValidationError> {
    require_text(&exercise.name, || "name".to_owned())?;
    require_non_negative(exercise.weight, || "weight".to_owned())
}

/// Validate a list of exercise summaries
///
/// # Errors
/// Returns the first failure, with the field path prefixed by the list index
pub fn validate_exercises(exercises: &[Exercise]) -> Result<(), ValidationError> {
    for (index, exercise) in exercises.iter().enumerate() {
        validate_exercise(exercise)
            .map_err(|error| prefixed(error, &format!("exercises[{index}]")))?;
    }
    Ok(())
}

/// Validate a single logged set
///
/// # Errors
/// Returns an error if weight or rest duration is negative or non-finite
pub fn validate_set(set: &ExerciseSet) -> Result<(), ValidationError> {
    require_non_negative(set.weight, || "weight".to_owned())?;
    require_non_negative(set.rest_duration, || "restDuration".to_owned())
}

/// Validate a logged exercise and all of its sets
///
/// # Errors
/// Returns an error if the name is blank or any set is invalid
pub fn validate_logged_exercise(exercise: &LoggedExercise) -> Result<(), ValidationError> {
    require_text(&exercise.name, || "name".to_owned())?;
    for (index, set) in exercise.sets.iter().enumerate() {
        validate_set(set).map_err(|error| prefixed(error, &format!("sets[{index}]")))?;
    }
    Ok(())
}

fn validate_contents(
    muscle_groups: &[String],
    exercises: &[LoggedExercise],
) -> Result<(), ValidationError> {
    for (index, group) in muscle_groups.iter().enumerate() {
        require_text(group, || format!("muscleGroups[{index}]"))?;
    }
    for (index, exercise) in exercises.iter().enumerate() {
        validate_logged_exercise(exercise)
            .map_err(|error| prefixed(error, &format!("exercises[{index}]")))?;
    }
    Ok(())
}

/// Validate a stored workout document
///
/// # Errors
/// Returns an error if the owner is blank, a muscle group is blank, or any exercise is invalid
pub fn validate_workout(workout: &Workout) -> Result<(), ValidationError> {
    let result = require_text(&workout.owner_id, || "ownerId".to_owned())
        .and_then(|()| validate_contents(&workout.muscle_groups, &workout.exercises));
    if let Err(ref error) = result {
        warn!(workout_id = %workout.id, field = error.field(), "Rejected workout: {error}");
    }
    result
}

/// Validate a workout creation request
///
/// # Errors
/// Returns an error if a muscle group is blank or any exercise is invalid
pub fn validate_create_workout(request: &CreateWorkout) -> Result<(), ValidationError> {
    validate_contents(&request.muscle_groups, &request.exercises)
}

fn prefixed(error: ValidationError, prefix: &str) -> ValidationError {
    let join = |field: String| format!("{prefix}.{field}");
    match error {
        ValidationError::EmptyField { field } => ValidationError::EmptyField { field: join(field) },
        ValidationError::NotFinite { field } => ValidationError::NotFinite { field: join(field) },
        ValidationError::Negative { field, value } => ValidationError::Negative {
            field: join(field),
            value,
        },
    }
}
