// ABOUTME: Environment-based configuration for the Fitcoach application and CLI
// ABOUTME: Parses deployment environment, log level, weight unit, and report precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration.
//!
//! Text settings are parsed leniently and fall back to defaults; numeric
//! settings are strict and fail with a [`ConfigError`].

use fitcoach_core::constants::report::{DEFAULT_PRECISION, MAX_PRECISION};
use fitcoach_core::constants::units::KG_PER_POUND;
use fitcoach_core::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error for {key}: {value:?} is not a valid number")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value found
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::ConfigInvalid, message).with_source(error)
    }
}

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Unit used when rendering weights and volumes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (the unit workouts are logged in)
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Parse from string with fallback to pounds
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Self::Kg,
            _ => Self::Lb,
        }
    }

    /// Convert a value in pounds to this unit
    #[must_use]
    pub fn convert_pounds(self, pounds: f64) -> f64 {
        match self {
            Self::Lb => pounds,
            Self::Kg => pounds * KG_PER_POUND,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lb => write!(f, "lb"),
            Self::Kg => write!(f, "kg"),
        }
    }
}

/// Rendering settings for session reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Output weight unit
    pub weight_unit: WeightUnit,
    /// Decimal places kept in rendered values
    pub precision: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Lb,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Report rendering settings
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    /// Returns an error if a numeric setting is malformed or out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if a numeric setting is malformed or out of range
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup("FITCOACH_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let log_level = lookup("LOG_LEVEL")
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        let weight_unit = lookup("FITCOACH_WEIGHT_UNIT")
            .map(|value| WeightUnit::from_str_or_default(&value))
            .unwrap_or_default();

        let precision = match lookup("FITCOACH_REPORT_PRECISION") {
            Some(value) => parse_precision(&value)?,
            None => DEFAULT_PRECISION,
        };

        Ok(Self {
            environment,
            log_level,
            report: ReportConfig {
                weight_unit,
                precision,
            },
        })
    }
}

fn parse_precision(value: &str) -> Result<u32, ConfigError> {
    let precision: u32 = value.trim().parse().map_err(|_| ConfigError::Parse {
        key: "FITCOACH_REPORT_PRECISION",
        value: value.to_owned(),
    })?;
    if precision > MAX_PRECISION {
        return Err(ConfigError::ValueOutOfRange(
            "FITCOACH_REPORT_PRECISION must be between 0 and 6",
        ));
    }
    Ok(precision)
}
