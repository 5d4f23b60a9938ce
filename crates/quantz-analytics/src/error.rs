//! Unified error types for the analytics routines.

use quantz_math::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameter (empty series, bad shape, out-of-range value).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Not enough observations for the estimator.
    #[error("insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations provided.
        actual: usize,
    },

    /// Parameter outside its admissible range.
    #[error("{name} value {value} is out of bounds ({min}, {max})")]
    OutOfBounds {
        /// Name of the parameter that is out of bounds.
        name: String,
        /// The value that was provided.
        value: f64,
        /// Exclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput { reason } => AnalyticsError::InvalidInput(reason),
            MathError::NonFinite { context } => {
                AnalyticsError::InvalidInput(format!("non-finite value in {context}"))
            }
            MathError::InsufficientData { required, actual } => {
                AnalyticsError::InsufficientData { required, actual }
            }
            err @ MathError::DimensionMismatch { .. } => {
                AnalyticsError::InvalidInput(err.to_string())
            }
            other => AnalyticsError::MathError(other.to_string()),
        }
    }
}

/// Checks that `confidence_level` lies strictly inside (0, 1).
pub(crate) fn validate_confidence(confidence_level: f64) -> AnalyticsResult<()> {
    if confidence_level > 0.0 && confidence_level < 1.0 {
        Ok(())
    } else {
        Err(AnalyticsError::OutOfBounds {
            name: "confidence_level".to_string(),
            value: confidence_level,
            min: 0.0,
            max: 1.0,
        })
    }
}

impl AnalyticsError {
    /// Returns true for errors caused by the caller's arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InvalidInput(_)
                | AnalyticsError::InsufficientData { .. }
                | AnalyticsError::OutOfBounds { .. }
        )
    }
}
