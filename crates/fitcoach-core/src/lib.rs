// ABOUTME: Core types and constants for the Fitcoach workout platform
// ABOUTME: Foundation crate with error handling, workout models, constants, and schema validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach Core
//!
//! Foundation crate providing shared types and constants for the Fitcoach
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Training constants (Epley coefficient, unit conversion, muscle groups)
//! - **models**: Exercise summaries and logged workout documents
//! - **validation**: Schema rules applied before data reaches the metrics layer

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, Workout, `ExerciseSet`, etc.)
pub mod models;

/// Schema validation for exercises and logged workouts
pub mod validation;
