// ABOUTME: Flat exercise summary and set/rep total records
// ABOUTME: Inputs and outputs of the workout volume metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One exercise performed in a session, summarised as `sets x reps @ weight`.
///
/// Weight is in pounds. Counts are unsigned so negative sets or reps cannot be
/// represented; weight is not range-checked here (see `validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name, e.g. "Bench Press"
    pub name: String,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Load in pounds
    pub weight: f64,
}

impl Exercise {
    /// Create an exercise summary
    #[must_use]
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight,
        }
    }
}

/// Summed set and rep counts across a list of exercises.
///
/// `total_reps` adds each exercise's `reps` field once; it is not `sets x reps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeTotals {
    /// Sum of `sets` over all exercises
    pub total_sets: u64,
    /// Sum of `reps` over all exercises
    pub total_reps: u64,
}
