// ABOUTME: Configuration module root for the Fitcoach application
// ABOUTME: Re-exports environment-driven configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and typed configuration
pub mod environment;

pub use environment::{
    AppConfig, ConfigError, Environment, LogLevel, ReportConfig, WeightUnit,
};
