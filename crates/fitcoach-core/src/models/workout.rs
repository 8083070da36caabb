// ABOUTME: Logged workout documents with per-set detail
// ABOUTME: Workout, LoggedExercise, ExerciseSet and the CreateWorkout request shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    /// Repetitions completed
    pub reps: u32,
    /// Load in pounds
    pub weight: f64,
    /// Rest taken after the set, in seconds
    pub rest_duration: f64,
}

/// An exercise within a logged workout, with every set recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExercise {
    /// Exercise name
    pub name: String,
    /// Sets in the order they were performed
    pub sets: Vec<ExerciseSet>,
}

impl LoggedExercise {
    /// Heaviest set weight, or 0 when no sets were logged
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|set| set.weight).fold(0.0, f64::max)
    }
}

/// A stored workout document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Document id
    pub id: String,
    /// Id of the trainee who logged the workout
    pub owner_id: String,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Muscle groups trained
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Build a stored workout from a create request, assigning a fresh id
    #[must_use]
    pub fn from_create(
        owner_id: impl Into<String>,
        request: CreateWorkout,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            timestamp: now.timestamp_millis(),
            muscle_groups: request.muscle_groups,
            exercises: request.exercises,
            notes: request.notes,
        }
    }

    /// Creation time as a UTC datetime, if the timestamp is representable
    #[must_use]
    pub fn logged_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Whether the workout lists the given muscle group (exact match)
    #[must_use]
    pub fn targets(&self, muscle_group: &str) -> bool {
        self.muscle_groups.iter().any(|group| group == muscle_group)
    }

    /// Iterate over every logged set in the workout
    pub fn sets(&self) -> impl Iterator<Item = &ExerciseSet> {
        self.exercises.iter().flat_map(|exercise| exercise.sets.iter())
    }
}

/// Request shape for logging a new workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkout {
    /// Muscle groups trained
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
