// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fitcoach-cli
// ABOUTME: Renders session reports, progress tables, and history summaries as plain text

use fitcoach::history::HistoryStats;
use fitcoach::models::Workout;
use fitcoach::progress::{Milestone, ProgressReport, Trend};
use fitcoach::report::SessionReport;

const fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    }
}

/// Display a session report
pub fn display_session_report(report: &SessionReport) {
    let unit = report.unit;
    println!("\nSession Summary ({} exercises)", report.exercise_count);
    println!("{}", "=".repeat(50));
    println!("   Total volume:        {} {unit}", report.total_volume);
    println!("   Average weight:      {} {unit}", report.average_weight);
    println!("   Total sets:          {}", report.total_sets);
    println!("   Total reps:          {}", report.total_reps);
    println!("   Volume per set:      {} {unit}", report.average_volume_per_set);
    if let Some(per_minute) = report.volume_per_minute {
        println!("   Volume per minute:   {per_minute} {unit}");
    }

    if !report.one_rep_maxes.is_empty() {
        println!("\nEstimated 1RM");
        println!("{}", "-".repeat(50));
        for entry in &report.one_rep_maxes {
            println!("   {:<30} {:>10} {unit}", entry.name, entry.estimate);
        }
    }
}

/// Display per-exercise progress with history totals
pub fn display_progress_report(report: &ProgressReport) {
    let totals = &report.totals;
    println!("\nProgress Overview");
    println!("{}", "=".repeat(72));
    println!(
        "   Workouts: {}   Exercises: {}   Sets: {}   Reps: {}   Avg weight: {:.1} lb",
        totals.total_workouts,
        report.exercises.len(),
        totals.total_sets,
        totals.total_reps,
        totals.average_weight
    );

    display_milestones(&report.milestones);

    if report.exercises.is_empty() {
        println!("\nNo workouts logged yet.");
        return;
    }

    println!(
        "\n   {:<28} {:>8} {:>10} {:>10} {:>8} {:>7}",
        "Exercise", "Sets", "Max", "Avg", "Reps", "Trend"
    );
    println!("{}", "-".repeat(72));
    for exercise in &report.exercises {
        println!(
            "   {:<28} {:>8} {:>10.1} {:>10.1} {:>8} {:>7}",
            exercise.name,
            exercise.attempts,
            exercise.max_weight,
            exercise.avg_weight,
            exercise.total_reps,
            trend_label(exercise.trend)
        );
    }
}

fn display_milestones(milestones: &[Milestone]) {
    println!("\nMilestones");
    println!("{}", "-".repeat(72));
    for milestone in milestones {
        if milestone.achieved {
            println!("   [x] {}", milestone.title);
        } else {
            println!(
                "   [ ] {} ({}/{})",
                milestone.title, milestone.current, milestone.target
            );
        }
    }
}

/// Display matching workouts and whole-history counters
pub fn display_history(workouts: &[&Workout], stats: &HistoryStats) {
    println!("\nWorkout History");
    println!("{}", "=".repeat(60));
    println!(
        "   Total: {}   This week: {}   Exercises: {}   Volume: {:.0} lb",
        stats.total_workouts, stats.this_week, stats.total_exercises, stats.total_volume
    );
    println!("\nShowing {} workout(s)", workouts.len());
    println!("{}", "-".repeat(60));

    for workout in workouts {
        let date = workout
            .logged_at()
            .map_or_else(|| "unknown date".to_owned(), |at| at.format("%Y-%m-%d").to_string());
        println!("   {date}  {}", workout.muscle_groups.join(", "));
        for exercise in &workout.exercises {
            println!("      - {} ({} sets)", exercise.name, exercise.sets.len());
        }
    }
}
