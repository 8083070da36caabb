// ABOUTME: Main library entry point for the Fitcoach workout platform
// ABOUTME: Ties configuration, logging, data loading, and session reports to the analysis crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach
//!
//! Workout metrics and progress tracking for trainees and their trainers.
//!
//! ## Architecture
//!
//! - **fitcoach-core**: error types, workout models, constants, schema validation
//! - **fitcoach-intelligence**: volume metrics, progress tracking, history filtering
//! - this crate: environment configuration, logging, file loading, session
//!   reports, and the `fitcoach-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use fitcoach::config::ReportConfig;
//! use fitcoach::models::Exercise;
//! use fitcoach::report::SessionReport;
//!
//! let session = vec![Exercise::new("Bench Press", 2, 10, 100.0)];
//! let report = SessionReport::from_exercises(&session, Some(20.0), &ReportConfig::default());
//!
//! assert_eq!(report.volume_per_minute, Some(100.0));
//! ```

/// Configuration management from environment variables
pub mod config;

/// Loading and validating workout data files
pub mod data;

/// Production logging and structured output
pub mod logging;

/// Session reports rendered in the configured unit
pub mod report;

pub use fitcoach_core::{constants, errors, models, validation};
pub use fitcoach_intelligence::{history, metrics, progress};
