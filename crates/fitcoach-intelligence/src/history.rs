// ABOUTME: Workout history filtering by muscle group and date range, plus history-wide stats
// ABOUTME: Counts workouts, workouts in the past week, exercises, and per-set volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use fitcoach_core::constants::time_constants::DAYS_PER_WEEK;
use fitcoach_core::models::Workout;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing a workout history. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutFilters {
    /// Only workouts listing this muscle group (exact match)
    pub muscle_group: Option<String>,
    /// Only workouts logged at or after this instant
    pub date_start: Option<DateTime<Utc>>,
    /// Only workouts logged at or before this instant
    pub date_end: Option<DateTime<Utc>>,
}

impl WorkoutFilters {
    /// Build filters from calendar dates, each taken as midnight UTC
    ///
    /// Both bounds are compared as instants, so `to` admits only workouts
    /// logged at exactly midnight on that day, not later the same day.
    #[must_use]
    pub fn from_dates(
        muscle_group: Option<String>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        Self {
            muscle_group,
            date_start: from.map(midnight_utc),
            date_end: to.map(midnight_utc),
        }
    }

    /// Whether a single workout satisfies every set criterion
    #[must_use]
    pub fn matches(&self, workout: &Workout) -> bool {
        if let Some(group) = self.muscle_group.as_deref() {
            if !workout.targets(group) {
                return false;
            }
        }
        let logged = workout.timestamp;
        if let Some(start) = self.date_start {
            if logged < start.timestamp_millis() {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if logged > end.timestamp_millis() {
                return false;
            }
        }
        true
    }

    /// Workouts satisfying the filters, in input order
    #[must_use]
    pub fn apply<'a>(&self, workouts: &'a [Workout]) -> Vec<&'a Workout> {
        workouts
            .iter()
            .filter(|workout| self.matches(workout))
            .collect()
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Summary counters for a whole workout history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    /// Number of workouts
    pub total_workouts: u64,
    /// Workouts logged within the seven days before `now`
    pub this_week: u64,
    /// Number of logged exercise entries
    pub total_exercises: u64,
    /// Sum over every set of `weight x reps`
    pub total_volume: f64,
}

impl HistoryStats {
    /// Compute stats over the full history relative to `now`
    #[must_use]
    pub fn compute(workouts: &[Workout], now: DateTime<Utc>) -> Self {
        let week_start = (now - Duration::days(DAYS_PER_WEEK)).timestamp_millis();

        let (this_week, total_exercises, total_volume) = workouts
            .par_iter()
            .map(|workout| {
                let recent = u64::from(workout.timestamp > week_start);
                let volume: f64 = workout
                    .sets()
                    .map(|set| set.weight * f64::from(set.reps))
                    .sum();
                (recent, workout.exercises.len() as u64, volume)
            })
            .reduce(
                || (0, 0, 0.0),
                |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
            );

        Self {
            total_workouts: workouts.len() as u64,
            this_week,
            total_exercises,
            total_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;
    use fitcoach_core::models::{ExerciseSet, LoggedExercise};

    fn workout(day: u32, groups: &[&str]) -> Workout {
        let logged = Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap();
        Workout {
            id: format!("day-{day}"),
            owner_id: "trainee".to_owned(),
            timestamp: logged.timestamp_millis(),
            muscle_groups: groups.iter().map(|g| (*g).to_owned()).collect(),
            exercises: vec![LoggedExercise {
                name: "Bench Press".to_owned(),
                sets: vec![
                    ExerciseSet {
                        reps: 10,
                        weight: 100.0,
                        rest_duration: 90.0,
                    },
                    ExerciseSet {
                        reps: 8,
                        weight: 120.0,
                        rest_duration: 90.0,
                    },
                ],
            }],
            notes: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let history = vec![workout(1, &["Chest"]), workout(2, &[])];
        assert_eq!(WorkoutFilters::default().apply(&history).len(), 2);
    }

    #[test]
    fn test_muscle_group_filter() {
        let history = vec![workout(1, &["Chest", "Triceps"]), workout(2, &["Legs"])];
        let filters = WorkoutFilters {
            muscle_group: Some("Legs".to_owned()),
            ..WorkoutFilters::default()
        };
        let matched = filters.apply(&history);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "day-2");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let history = vec![workout(1, &[]), workout(5, &[]), workout(9, &[])];
        let filters = WorkoutFilters {
            muscle_group: None,
            date_start: Some(Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap()),
            date_end: Some(Utc.with_ymd_and_hms(2025, 1, 9, 12, 0, 0).unwrap()),
        };
        let ids: Vec<&str> = filters.apply(&history).iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["day-5", "day-9"]);
    }

    #[test]
    fn test_from_dates_end_bound_is_midnight() {
        let mut at_midnight = workout(9, &[]);
        at_midnight.id = "midnight".to_owned();
        at_midnight.timestamp = Utc
            .with_ymd_and_hms(2025, 1, 9, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        // workout(9) is logged at noon on the 9th
        let history = vec![workout(5, &[]), at_midnight, workout(9, &[])];

        let filters = WorkoutFilters::from_dates(
            None,
            NaiveDate::from_ymd_opt(2025, 1, 5),
            NaiveDate::from_ymd_opt(2025, 1, 9),
        );
        let ids: Vec<&str> = filters.apply(&history).iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["day-5", "midnight"]);
    }

    #[test]
    fn test_history_stats() {
        let history = vec![workout(1, &[]), workout(10, &[]), workout(14, &[])];
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();

        let stats = HistoryStats::compute(&history, now);

        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.this_week, 2);
        assert_eq!(stats.total_exercises, 3);
        // (10 x 100 + 8 x 120) per workout
        assert_eq!(stats.total_volume, 3.0 * 1960.0);
    }

    #[test]
    fn test_history_stats_empty() {
        assert_eq!(HistoryStats::compute(&[], Utc::now()), HistoryStats::default());
    }
}
