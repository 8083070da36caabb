// ABOUTME: Workout volume metrics over flat exercise summaries
// ABOUTME: Total volume, average weight, set/rep totals, volume per set, Epley 1RM, volume per minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout metrics calculation
//!
//! Every function here is total: empty input, zero sets and zero durations
//! all produce `0` instead of an error, so dashboards can render placeholders
//! without special-casing. Callers that need to tell "no data" apart from a
//! zero result check the input length themselves. Inputs are never validated
//! here; see `fitcoach_core::validation`.

use fitcoach_core::constants::strength::EPLEY_REPS_DIVISOR;
use fitcoach_core::models::{Exercise, VolumeTotals};

/// Volume of a single exercise: `sets x reps x weight`
#[must_use]
pub fn exercise_volume(exercise: &Exercise) -> f64 {
    f64::from(exercise.sets) * f64::from(exercise.reps) * exercise.weight
}

/// Total volume in pounds, summed over all exercises
///
/// ```
/// use fitcoach_core::models::Exercise;
/// use fitcoach_intelligence::metrics::total_volume;
///
/// // 2 sets of 10 reps @ 100 lbs
/// let session = [Exercise::new("Bench Press", 2, 10, 100.0)];
/// assert!((total_volume(&session) - 2000.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn total_volume(exercises: &[Exercise]) -> f64 {
    exercises.iter().map(exercise_volume).sum()
}

/// Straight mean of each exercise's weight, not weighted by sets or reps
#[must_use]
pub fn average_weight(exercises: &[Exercise]) -> f64 {
    if exercises.is_empty() {
        return 0.0;
    }
    let total: f64 = exercises.iter().map(|exercise| exercise.weight).sum();
    total / exercises.len() as f64
}

/// Sum of the `sets` fields and, independently, of the `reps` fields
#[must_use]
pub fn total_sets_and_reps(exercises: &[Exercise]) -> VolumeTotals {
    exercises
        .iter()
        .fold(VolumeTotals::default(), |totals, exercise| VolumeTotals {
            total_sets: totals.total_sets + u64::from(exercise.sets),
            total_reps: totals.total_reps + u64::from(exercise.reps),
        })
}

/// Total volume divided by total sets; `0` when no sets were performed
#[must_use]
pub fn average_volume_per_set(exercises: &[Exercise]) -> f64 {
    let total_sets: u64 = exercises.iter().map(|exercise| u64::from(exercise.sets)).sum();
    if total_sets == 0 {
        return 0.0;
    }
    total_volume(exercises) / total_sets as f64
}

/// Estimated one-rep max using the Epley formula `weight x (1 + reps / 30)`
///
/// A single rep returns the weight unchanged.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + f64::from(reps) / EPLEY_REPS_DIVISOR)
}

/// Total volume per minute of training; `0` when the duration is zero
#[must_use]
pub fn volume_per_minute(exercises: &[Exercise], duration_minutes: f64) -> f64 {
    if duration_minutes == 0.0 {
        return 0.0;
    }
    total_volume(exercises) / duration_minutes
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    fn exercise(sets: u32, reps: u32, weight: f64) -> Exercise {
        Exercise::new("Exercise", sets, reps, weight)
    }

    #[test]
    fn test_total_volume_multiple_exercises() {
        let exercises = [
            Exercise::new("Bench Press", 2, 10, 100.0),
            Exercise::new("Squats", 3, 8, 200.0),
            Exercise::new("Deadlifts", 1, 5, 300.0),
        ];
        assert_eq!(total_volume(&exercises), 8300.0);
    }

    #[test]
    fn test_total_volume_fractional_and_zero_weight() {
        assert_eq!(total_volume(&[exercise(3, 12, 25.5)]), 918.0);
        assert_eq!(total_volume(&[exercise(3, 20, 0.0)]), 0.0);
    }

    #[test]
    fn test_negative_weight_is_not_rejected() {
        assert_eq!(total_volume(&[exercise(2, 5, -10.0)]), -100.0);
    }

    #[test]
    fn test_average_weight_is_per_exercise() {
        let exercises = [exercise(1, 1, 100.0), exercise(10, 10, 200.0), exercise(1, 1, 300.0)];
        assert_eq!(average_weight(&exercises), 200.0);
        assert_eq!(average_weight(&[exercise(1, 1, 150.0)]), 150.0);
    }

    #[test]
    fn test_total_reps_sums_rep_fields() {
        let totals = total_sets_and_reps(&[exercise(2, 12, 100.0), exercise(5, 5, 200.0)]);
        assert_eq!(totals.total_sets, 7);
        assert_eq!(totals.total_reps, 17);
    }

    #[test]
    fn test_average_volume_per_set() {
        assert_eq!(average_volume_per_set(&[exercise(2, 10, 100.0)]), 1000.0);
        assert_eq!(
            average_volume_per_set(&[exercise(2, 10, 100.0), exercise(3, 8, 100.0)]),
            880.0
        );
        assert_eq!(average_volume_per_set(&[exercise(0, 10, 100.0)]), 0.0);
    }

    #[test]
    fn test_one_rep_max() {
        assert_eq!(estimate_one_rep_max(225.0, 1), 225.0);
        let estimate = estimate_one_rep_max(185.0, 5);
        assert_eq!((estimate * 100.0).round() / 100.0, 215.83);
        assert_eq!((estimate_one_rep_max(135.0, 10) * 100.0).round() / 100.0, 180.0);
        assert_eq!(estimate_one_rep_max(100.0, 0), 100.0);
    }

    #[test]
    fn test_volume_per_minute() {
        assert_eq!(volume_per_minute(&[exercise(2, 10, 100.0)], 20.0), 100.0);
        assert_eq!(volume_per_minute(&[exercise(1, 10, 100.0)], 12.5), 80.0);
        assert_eq!(volume_per_minute(&[exercise(2, 10, 100.0)], 0.0), 0.0);
        assert_eq!(volume_per_minute(&[], 30.0), 0.0);
    }

    #[test]
    fn test_empty_input_degrades_to_zero() {
        assert_eq!(total_volume(&[]), 0.0);
        assert_eq!(average_weight(&[]), 0.0);
        assert_eq!(total_sets_and_reps(&[]), VolumeTotals::default());
        assert_eq!(average_volume_per_set(&[]), 0.0);
    }
}
