// ABOUTME: Session report assembling every workout metric for one training session
// ABOUTME: Converts pound-based metrics into the configured unit and rounds for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session reports
//!
//! The metrics functions always work in raw pounds. Unit conversion and
//! rounding happen here and nowhere else.

use crate::config::{ReportConfig, WeightUnit};
use fitcoach_core::constants::report::MAX_PRECISION;
use fitcoach_core::models::Exercise;
use fitcoach_intelligence::metrics;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Estimated one-rep max for a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxEstimate {
    /// Exercise name
    pub name: String,
    /// Epley estimate in the report unit
    pub estimate: f64,
}

/// All session metrics, rendered in one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    /// Unit for every weight-derived value below
    pub unit: WeightUnit,
    /// Number of exercises in the session
    pub exercise_count: usize,
    /// Sum of `sets x reps x weight`
    pub total_volume: f64,
    /// Straight mean of exercise weights
    pub average_weight: f64,
    /// Sum of sets
    pub total_sets: u64,
    /// Sum of per-exercise reps
    pub total_reps: u64,
    /// Volume divided by total sets
    pub average_volume_per_set: f64,
    /// Volume per minute, present when a duration was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_per_minute: Option<f64>,
    /// Best Epley estimate per exercise name, heaviest first
    pub one_rep_maxes: Vec<OneRepMaxEstimate>,
}

impl SessionReport {
    /// Build a report for one session
    #[must_use]
    pub fn from_exercises(
        exercises: &[Exercise],
        duration_minutes: Option<f64>,
        config: &ReportConfig,
    ) -> Self {
        let render =
            |pounds: f64| round_to(config.weight_unit.convert_pounds(pounds), config.precision);
        let totals = metrics::total_sets_and_reps(exercises);

        let mut one_rep_maxes = best_one_rep_maxes(exercises);
        for entry in &mut one_rep_maxes {
            entry.estimate = render(entry.estimate);
        }
        // Stable: equal estimates keep first-seen order
        one_rep_maxes.sort_by(|a, b| b.estimate.total_cmp(&a.estimate));

        let report = Self {
            unit: config.weight_unit,
            exercise_count: exercises.len(),
            total_volume: render(metrics::total_volume(exercises)),
            average_weight: render(metrics::average_weight(exercises)),
            total_sets: totals.total_sets,
            total_reps: totals.total_reps,
            average_volume_per_set: render(metrics::average_volume_per_set(exercises)),
            volume_per_minute: duration_minutes
                .map(|minutes| render(metrics::volume_per_minute(exercises, minutes))),
            one_rep_maxes,
        };
        debug!(
            exercises = report.exercise_count,
            total_volume = report.total_volume,
            unit = %report.unit,
            "Built session report"
        );
        report
    }
}

/// Best Epley estimate in pounds per exercise name, in first-seen order
fn best_one_rep_maxes(exercises: &[Exercise]) -> Vec<OneRepMaxEstimate> {
    let mut best: Vec<OneRepMaxEstimate> = Vec::new();
    for exercise in exercises {
        let estimate = metrics::estimate_one_rep_max(exercise.weight, exercise.reps);
        match best.iter_mut().find(|entry| entry.name == exercise.name) {
            Some(entry) => entry.estimate = entry.estimate.max(estimate),
            None => best.push(OneRepMaxEstimate {
                name: exercise.name.clone(),
                estimate,
            }),
        }
    }
    best
}

/// Round to a fixed number of decimal places (at most six)
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let exponent = i32::try_from(precision.min(MAX_PRECISION)).unwrap_or_default();
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
