// ABOUTME: Core data models for logged training data
// ABOUTME: Re-exports exercise summaries and workout documents used by the analysis crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Two shapes of training data flow through Fitcoach:
//!
//! - `Exercise`: a flat per-session summary (`sets x reps @ weight`) consumed
//!   by the volume metrics.
//! - `Workout`: a logged document as stored by the application, holding each
//!   individual `ExerciseSet` so history views can track progress per set.
//!
//! All models serialize with camelCase keys to match the stored documents.

mod exercise;
mod workout;

pub use exercise::{Exercise, VolumeTotals};
pub use workout::{CreateWorkout, ExerciseSet, LoggedExercise, Workout};
