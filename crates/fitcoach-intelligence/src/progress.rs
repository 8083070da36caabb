// ABOUTME: Per-exercise progress tracking across a trainee's workout history
// ABOUTME: Attempts, max and average weight, rep totals, recent-vs-older trend, totals, and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress tracking
//!
//! Works on logged workouts (per-set detail) rather than flat summaries. The
//! history is ordered newest first before analysis; the trend for an exercise
//! compares its heaviest set in the newer half of the history with the older
//! half. Milestones are derived from the history totals alone.

use fitcoach_core::constants::milestones::{
    NEXT_WORKOUT_TARGET, TOTAL_REPS_TARGET, WORKOUT_TARGETS,
};
use fitcoach_core::models::Workout;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Direction of an exercise's heaviest load over the history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Newer half lifted heavier than the older half
    Up,
    /// Newer half lifted lighter than the older half
    Down,
    /// No change in heaviest load
    #[default]
    Stable,
}

impl Trend {
    fn between(recent_max: f64, older_max: f64) -> Self {
        if recent_max > older_max {
            Self::Up
        } else if recent_max < older_max {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

/// Accumulated statistics for one exercise name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    /// Exercise name
    pub name: String,
    /// Number of logged sets
    pub attempts: u64,
    /// Heaviest set weight
    pub max_weight: f64,
    /// Mean set weight
    pub avg_weight: f64,
    /// Sum of reps over all sets
    pub total_reps: u64,
    /// Heaviest-load trend, newer half vs older half
    pub trend: Trend,
}

/// Totals across the whole history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTotals {
    /// Number of workouts
    pub total_workouts: u64,
    /// Number of logged exercise entries
    pub total_exercises: u64,
    /// Number of logged sets
    pub total_sets: u64,
    /// Sum of reps over all sets
    pub total_reps: u64,
    /// Mean set weight across every set (0 with no sets)
    pub average_weight: f64,
}

impl ProgressTotals {
    /// Milestones reached so far, followed by the five-workout goal while it is still open
    #[must_use]
    pub fn milestones(&self) -> Vec<Milestone> {
        let workout_goals = WORKOUT_TARGETS.iter().map(|&target| {
            let title = if target == 1 {
                "First Workout".to_owned()
            } else {
                format!("{target} Workouts Completed")
            };
            Milestone::new(title, self.total_workouts, target)
        });
        let reps_goal = Milestone::new(
            format!("{TOTAL_REPS_TARGET} Total Reps"),
            self.total_reps,
            TOTAL_REPS_TARGET,
        );

        let mut milestones: Vec<Milestone> = workout_goals
            .chain(std::iter::once(reps_goal))
            .filter(|milestone| milestone.achieved)
            .collect();
        if self.total_workouts < NEXT_WORKOUT_TARGET {
            milestones.push(Milestone::new(
                format!("{NEXT_WORKOUT_TARGET} Workouts Completed"),
                self.total_workouts,
                NEXT_WORKOUT_TARGET,
            ));
        }
        milestones
    }
}

/// A training milestone and how far the history is toward it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Display title, e.g. "10 Workouts Completed"
    pub title: String,
    /// Whether `current` has reached `target`
    pub achieved: bool,
    /// Current count of workouts or reps
    pub current: u64,
    /// Count needed to reach the milestone
    pub target: u64,
}

impl Milestone {
    fn new(title: String, current: u64, target: u64) -> Self {
        Self {
            title,
            achieved: current >= target,
            current,
            target,
        }
    }
}

/// Progress report for a workout history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Per-exercise progress, most attempted first
    pub exercises: Vec<ExerciseProgress>,
    /// History-wide totals
    pub totals: ProgressTotals,
    /// Milestones derived from the totals
    pub milestones: Vec<Milestone>,
}

/// Computes progress reports from workout histories
pub struct ProgressTracker;

impl ProgressTracker {
    /// Build a progress report from a workout history in any order
    #[must_use]
    pub fn analyze(workouts: &[Workout]) -> ProgressReport {
        let ordered = newest_first(workouts);
        let totals = Self::totals(&ordered);
        let report = ProgressReport {
            exercises: Self::exercise_progress(&ordered),
            milestones: totals.milestones(),
            totals,
        };
        debug!(
            workouts = report.totals.total_workouts,
            exercises = report.exercises.len(),
            "Computed progress report"
        );
        report
    }

    /// Per-exercise progress, sorted by attempts descending
    ///
    /// `workouts` must already be ordered newest first.
    fn exercise_progress(workouts: &[&Workout]) -> Vec<ExerciseProgress> {
        let mut order: Vec<String> = Vec::new();
        let mut stats: HashMap<&str, (ExerciseProgress, f64)> = HashMap::new();

        for workout in workouts {
            for exercise in &workout.exercises {
                let (entry, weight_sum) = stats.entry(exercise.name.as_str()).or_insert_with(|| {
                    order.push(exercise.name.clone());
                    (
                        ExerciseProgress {
                            name: exercise.name.clone(),
                            attempts: 0,
                            max_weight: 0.0,
                            avg_weight: 0.0,
                            total_reps: 0,
                            trend: Trend::Stable,
                        },
                        0.0,
                    )
                });
                for set in &exercise.sets {
                    entry.attempts += 1;
                    entry.max_weight = entry.max_weight.max(set.weight);
                    entry.total_reps += u64::from(set.reps);
                    *weight_sum += set.weight;
                }
            }
        }

        let split = workouts.len().div_ceil(2);
        let (recent, older) = workouts.split_at(split);

        let mut progress: Vec<ExerciseProgress> = order
            .iter()
            .filter_map(|name| stats.remove(name.as_str()))
            .map(|(mut entry, weight_sum)| {
                if entry.attempts > 0 {
                    entry.avg_weight = weight_sum / entry.attempts as f64;
                    entry.trend = Trend::between(
                        max_weight_for(recent, &entry.name),
                        max_weight_for(older, &entry.name),
                    );
                }
                entry
            })
            .collect();

        // Stable: ties keep first-seen order
        progress.sort_by(|a, b| b.attempts.cmp(&a.attempts));
        progress
    }

    fn totals(workouts: &[&Workout]) -> ProgressTotals {
        let mut totals = ProgressTotals {
            total_workouts: workouts.len() as u64,
            ..ProgressTotals::default()
        };
        let mut weight_sum = 0.0;
        for workout in workouts {
            totals.total_exercises += workout.exercises.len() as u64;
            for set in workout.sets() {
                totals.total_sets += 1;
                totals.total_reps += u64::from(set.reps);
                weight_sum += set.weight;
            }
        }
        totals.average_weight = weight_sum / totals.total_sets.max(1) as f64;
        totals
    }
}

/// Borrow the history sorted by timestamp, newest first (ties keep input order)
fn newest_first(workouts: &[Workout]) -> Vec<&Workout> {
    let mut ordered: Vec<&Workout> = workouts.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered
}

fn max_weight_for(workouts: &[&Workout], name: &str) -> f64 {
    workouts
        .iter()
        .flat_map(|workout| workout.exercises.iter())
        .filter(|exercise| exercise.name == name)
        .map(fitcoach_core::models::LoggedExercise::max_weight)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;
    use fitcoach_core::models::{ExerciseSet, LoggedExercise};

    fn workout(timestamp: i64, exercises: Vec<(&str, Vec<(u32, f64)>)>) -> Workout {
        Workout {
            id: format!("w{timestamp}"),
            owner_id: "trainee".to_owned(),
            timestamp,
            muscle_groups: Vec::new(),
            exercises: exercises
                .into_iter()
                .map(|(name, sets)| LoggedExercise {
                    name: name.to_owned(),
                    sets: sets
                        .into_iter()
                        .map(|(reps, weight)| ExerciseSet {
                            reps,
                            weight,
                            rest_duration: 60.0,
                        })
                        .collect(),
                })
                .collect(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let report = ProgressTracker::analyze(&[]);
        assert!(report.exercises.is_empty());
        assert_eq!(report.totals, ProgressTotals::default());
    }

    #[test]
    fn test_trend_up_when_recent_heavier() {
        // Input deliberately oldest first; analysis reorders newest first
        let history = vec![
            workout(1_000, vec![("Squat", vec![(5, 200.0)])]),
            workout(2_000, vec![("Squat", vec![(5, 225.0)])]),
        ];
        let report = ProgressTracker::analyze(&history);
        assert_eq!(report.exercises[0].trend, Trend::Up);
    }

    #[test]
    fn test_trend_down_and_stable() {
        let history = vec![
            workout(3_000, vec![("Bench", vec![(5, 135.0)]), ("Row", vec![(8, 95.0)])]),
            workout(2_000, vec![("Bench", vec![(5, 155.0)]), ("Row", vec![(8, 95.0)])]),
        ];
        let report = ProgressTracker::analyze(&history);
        let bench = report.exercises.iter().find(|e| e.name == "Bench").unwrap();
        let row = report.exercises.iter().find(|e| e.name == "Row").unwrap();
        assert_eq!(bench.trend, Trend::Down);
        assert_eq!(row.trend, Trend::Stable);
    }

    #[test]
    fn test_single_workout_is_up_when_loaded() {
        // The lone workout lands in the recent half; the older half has max 0
        let report = ProgressTracker::analyze(&[workout(1, vec![("Press", vec![(5, 95.0)])])]);
        assert_eq!(report.exercises[0].trend, Trend::Up);
    }

    #[test]
    fn test_exercise_with_no_sets_keeps_defaults() {
        let report = ProgressTracker::analyze(&[workout(1, vec![("Plank", vec![])])]);
        let plank = &report.exercises[0];
        assert_eq!(plank.attempts, 0);
        assert_eq!(plank.avg_weight, 0.0);
        assert_eq!(plank.trend, Trend::Stable);
        assert_eq!(report.totals.total_exercises, 1);
        assert_eq!(report.totals.average_weight, 0.0);
    }

    fn titles(milestones: &[Milestone]) -> Vec<&str> {
        milestones.iter().map(|m| m.title.as_str()).collect()
    }

    fn totals(workouts: u64, reps: u64) -> ProgressTotals {
        ProgressTotals {
            total_workouts: workouts,
            total_reps: reps,
            ..ProgressTotals::default()
        }
    }

    #[test]
    fn test_no_workouts_shows_only_pending_goal() {
        let milestones = totals(0, 0).milestones();
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].title, "5 Workouts Completed");
        assert!(!milestones[0].achieved);
        assert_eq!((milestones[0].current, milestones[0].target), (0, 5));
    }

    #[test]
    fn test_five_workout_boundary() {
        let four = totals(4, 0).milestones();
        assert_eq!(titles(&four), vec!["First Workout", "5 Workouts Completed"]);
        assert!(four[0].achieved);
        assert!(!four[1].achieved);
        assert_eq!(four[1].current, 4);

        let five = totals(5, 0).milestones();
        assert_eq!(titles(&five), vec!["First Workout", "5 Workouts Completed"]);
        assert!(five.iter().all(|m| m.achieved));
    }

    #[test]
    fn test_ten_and_twenty_workout_boundaries() {
        assert_eq!(totals(9, 0).milestones().len(), 2);
        assert_eq!(
            titles(&totals(10, 0).milestones()),
            vec!["First Workout", "5 Workouts Completed", "10 Workouts Completed"]
        );
        assert_eq!(totals(19, 0).milestones().len(), 3);
        assert_eq!(
            totals(20, 0).milestones().last().map(|m| m.title.as_str()),
            Some("20 Workouts Completed")
        );
    }

    #[test]
    fn test_total_reps_boundary() {
        let below = totals(6, 499).milestones();
        assert!(!titles(&below).contains(&"500 Total Reps"));

        let reached = totals(6, 500).milestones();
        assert_eq!(
            titles(&reached),
            vec!["First Workout", "5 Workouts Completed", "500 Total Reps"]
        );
    }

    #[test]
    fn test_report_carries_milestones() {
        let report = ProgressTracker::analyze(&[workout(1, vec![("Press", vec![(5, 95.0)])])]);
        assert_eq!(report.milestones, report.totals.milestones());
        assert_eq!(titles(&report.milestones), vec!["First Workout", "5 Workouts Completed"]);
    }
}
