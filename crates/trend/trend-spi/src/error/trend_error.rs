//! Trend error types

use thiserror::Error;

/// Errors that can occur while fitting or evaluating a trend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Fewer than `required` usable sample pairs remained after cleaning
    #[error("Insufficient data: need at least {required} paired samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The fitted slope is exactly zero; the line cannot be inverted
    #[error("Degenerate slope: fitted line is flat and cannot be solved for x")]
    DegenerateSlope,

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    Numerical(String),
}
