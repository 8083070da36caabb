// ABOUTME: Application constants for strength training calculations and workout catalogues
// ABOUTME: Epley coefficient, unit conversions, time windows, and the standard muscle group list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Strength training formula constants
pub mod strength {
    /// Divisor in the Epley one-rep max estimate: `1RM = weight x (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
}

/// Unit conversion factors
pub mod units {
    /// Exact kilograms per avoirdupois pound
    pub const KG_PER_POUND: f64 = 0.453_592_37;
}

/// Time constants used by history windows
pub mod time_constants {
    /// Days covered by the "this week" history counter
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Report rendering limits
pub mod report {
    /// Decimal places used when none are configured
    pub const DEFAULT_PRECISION: u32 = 2;

    /// Largest accepted number of decimal places
    pub const MAX_PRECISION: u32 = 6;
}

/// Progress milestone thresholds
pub mod milestones {
    /// Workout counts that earn a milestone, smallest first
    pub const WORKOUT_TARGETS: [u64; 4] = [1, 5, 10, 20];

    /// Lifetime rep count that earns a milestone
    pub const TOTAL_REPS_TARGET: u64 = 500;

    /// Workout goal shown as pending until it is reached
    pub const NEXT_WORKOUT_TARGET: u64 = 5;
}

/// Muscle groups offered when logging or filtering workouts
pub const MUSCLE_GROUPS: [&str; 12] = [
    "Chest",
    "Back",
    "Shoulders",
    "Biceps",
    "Triceps",
    "Forearms",
    "Core",
    "Legs",
    "Quads",
    "Hamstrings",
    "Glutes",
    "Calves",
];
