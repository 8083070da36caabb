// ABOUTME: Integration tests for session reports
// ABOUTME: Covers unit conversion, rounding, and agreement with the raw metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use fitcoach::config::{ReportConfig, WeightUnit};
use fitcoach::metrics;
use fitcoach::models::Exercise;
use fitcoach::report::SessionReport;

fn leg_day() -> Vec<Exercise> {
    vec![
        Exercise::new("Squat", 5, 5, 225.0),
        Exercise::new("Romanian Deadlift", 3, 8, 185.0),
        Exercise::new("Walking Lunge", 3, 12, 0.0),
    ]
}

#[test]
fn test_pound_report_matches_metrics() {
    let exercises = leg_day();
    let report = SessionReport::from_exercises(&exercises, Some(45.0), &ReportConfig::default());

    assert_eq!(report.unit, WeightUnit::Lb);
    assert_eq!(report.total_volume, metrics::total_volume(&exercises));
    assert_eq!(report.total_volume, 10_065.0);
    assert_eq!(report.total_sets, 11);
    assert_eq!(report.total_reps, 25);
    assert_eq!(report.average_weight, 136.67);
    assert_eq!(report.average_volume_per_set, 915.0);
    assert_eq!(report.volume_per_minute, Some(223.67));
}

#[test]
fn test_kilogram_report() {
    let config = ReportConfig {
        weight_unit: WeightUnit::Kg,
        precision: 1,
    };
    let report =
        SessionReport::from_exercises(&[Exercise::new("Bench Press", 2, 10, 100.0)], None, &config);

    assert_eq!(report.unit, WeightUnit::Kg);
    // 2000 lb
    assert_eq!(report.total_volume, 907.2);
    assert_eq!(report.average_weight, 45.4);
    // Counts are unit-free
    assert_eq!(report.total_sets, 2);
    assert_eq!(report.total_reps, 10);
}

#[test]
fn test_report_serializes_camel_case() {
    let report = SessionReport::from_exercises(&leg_day(), None, &ReportConfig::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["unit"], "lb");
    assert_eq!(value["totalSets"], 11);
    assert!(value.get("volumePerMinute").is_none());
    assert_eq!(value["oneRepMaxes"][0]["name"], "Squat");
}

#[test]
fn test_repeated_exercise_keeps_best_one_rep_max() {
    let exercises = [
        Exercise::new("Bench Press", 3, 10, 135.0),
        Exercise::new("Bench Press", 1, 3, 205.0),
        Exercise::new("Squat", 3, 5, 225.0),
    ];
    let report = SessionReport::from_exercises(&exercises, None, &ReportConfig::default());

    let names: Vec<&str> = report
        .one_rep_maxes
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Squat", "Bench Press"]);
    assert_eq!(report.one_rep_maxes[0].estimate, 262.5);
    // 205 x (1 + 3/30) beats 135 x (1 + 10/30) = 180
    assert_eq!(report.one_rep_maxes[1].estimate, 225.5);
    // Every row still counts toward the session totals
    assert_eq!(report.exercise_count, 3);
    assert_eq!(report.total_sets, 7);
}
