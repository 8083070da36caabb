// ABOUTME: Validation error types for exercise and workout schema checks
// ABOUTME: Structured errors carrying the offending field path, convertible into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors produced by the schema validation layer.
///
/// `field` is a dotted path into the validated document, for example
/// `exercises[2].sets[0].weight`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace
    #[error("{field} must not be empty")]
    EmptyField {
        /// Path of the empty field
        field: String,
    },

    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Path of the offending field
        field: String,
    },

    /// A numeric field was below zero
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Path of the offending field
        field: String,
        /// Rendered offending value
        value: String,
    },
}

impl ValidationError {
    /// Path of the field that failed validation
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field } | Self::NotFinite { field } | Self::Negative { field, .. } => {
                field
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::EmptyField { .. } => ErrorCode::MissingRequiredField,
            ValidationError::NotFinite { .. } => ErrorCode::InvalidInput,
            ValidationError::Negative { .. } => ErrorCode::ValueOutOfRange,
        };
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}
