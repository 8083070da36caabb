// ABOUTME: Fitcoach CLI - command-line access to workout metrics and progress tracking
// ABOUTME: Reports session metrics, one-rep max estimates, exercise progress, and history stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Metrics for one session (JSON array of {name, sets, reps, weight})
//! fitcoach-cli session --file push_day.json --duration 55
//!
//! # Epley one-rep max estimate
//! fitcoach-cli one-rep-max --weight 185 --reps 5
//!
//! # Per-exercise progress over a workout history
//! fitcoach-cli progress --file workouts.json
//!
//! # Filtered history with summary counters
//! fitcoach-cli history --file workouts.json --muscle-group Legs --from 2025-01-01
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitcoach::config::{AppConfig, LogLevel};
use fitcoach::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitcoach-cli",
    about = "Fitcoach workout metrics CLI",
    long_about = "Command-line tool for computing workout volume, one-rep max estimates, and progress over a training history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Metrics for a single session of exercise summaries
    Session {
        /// JSON file containing an array of exercises
        #[arg(long)]
        file: PathBuf,

        /// Session length in minutes (enables volume per minute)
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Estimate a one-rep max with the Epley formula
    OneRepMax {
        /// Weight lifted, in pounds
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,
    },

    /// Per-exercise progress and totals over a workout history
    Progress {
        /// JSON file containing an array of workouts
        #[arg(long)]
        file: PathBuf,
    },

    /// Filter a workout history and show summary counters
    History {
        /// JSON file containing an array of workouts
        #[arg(long)]
        file: PathBuf,

        /// Only workouts listing this muscle group
        #[arg(long)]
        muscle_group: Option<String>,

        /// Earliest date (YYYY-MM-DD, inclusive from midnight UTC)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest date (YYYY-MM-DD, inclusive up to midnight UTC, so later that day is excluded)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let mut logging = LoggingConfig::from_env(&config);
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;
    debug!(?config, "Loaded configuration");

    match cli.command {
        Command::Session { file, duration } => {
            commands::session::report(&file, duration, &config.report, cli.json)?;
        }
        Command::OneRepMax { weight, reps } => {
            commands::session::one_rep_max(weight, reps, &config.report, cli.json)?;
        }
        Command::Progress { file } => {
            commands::history::progress(&file, cli.json)?;
        }
        Command::History {
            file,
            muscle_group,
            from,
            to,
        } => {
            commands::history::filter(&file, muscle_group, from, to, cli.json)?;
        }
    }

    Ok(())
}
