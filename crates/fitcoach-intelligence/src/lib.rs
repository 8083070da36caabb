// ABOUTME: Workout intelligence crate root for the Fitcoach platform
// ABOUTME: Exposes volume metrics, progress tracking, and history filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach Intelligence
//!
//! Pure computations over training data. Nothing in this crate performs I/O
//! or holds state, so every function is safe to call from any thread.

/// Volume, average weight, set/rep totals, and one-rep max estimates
pub mod metrics;

/// Per-exercise progress and trends across a workout history
pub mod progress;

/// History filtering and summary counters
pub mod history;

pub use history::{HistoryStats, WorkoutFilters};
pub use progress::{
    ExerciseProgress, Milestone, ProgressReport, ProgressTotals, ProgressTracker, Trend,
};
