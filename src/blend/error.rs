//! Blend calculation errors
//!
//! Every failure is an input-validation outcome. A call either yields a
//! complete result or one of these.

use thiserror::Error;

use crate::models::ShareConvention;

/// Blend validation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlendError {
    #[error("Please enter valid numbers: {field} = '{value}' is not a finite number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Total mass must be greater than zero (got {value})")]
    NonPositiveMass { value: f64 },

    #[error("{field} share {value} is outside 0..={whole}")]
    ShareOutOfRange {
        field: &'static str,
        value: f64,
        whole: f64,
    },

    #[error(
        "Primary and secondary shares must add up to {expected} ({convention}), got {actual} (off by {delta:e})"
    )]
    PercentageSumMismatch {
        expected: f64,
        actual: f64,
        delta: f64,
        convention: ShareConvention,
    },

    #[error("Unknown fuel type: '{fuel_type}'")]
    UnknownFuelType { fuel_type: String },

    #[error("Total mass is too large: {field} overflows")]
    ResultOverflow { field: &'static str },
}

impl BlendError {
    /// Stable machine-readable code for tool responses
    pub fn code(&self) -> &'static str {
        match self {
            BlendError::InvalidNumber { .. } => "invalid_number",
            BlendError::NonPositiveMass { .. } => "non_positive_mass",
            BlendError::ShareOutOfRange { .. } => "share_out_of_range",
            BlendError::PercentageSumMismatch { .. } => "percentage_sum_mismatch",
            BlendError::UnknownFuelType { .. } => "unknown_fuel_type",
            BlendError::ResultOverflow { .. } => "result_overflow",
        }
    }
}

/// Result type for blend operations
pub type BlendOutcome<T> = Result<T, BlendError>;
