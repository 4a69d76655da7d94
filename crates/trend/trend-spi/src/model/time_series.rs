//! Time series model

use crate::model::TimeWindow;
use serde::{Deserialize, Serialize};

/// A named sequence of numeric-or-missing samples aligned to a time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Series name, echoed into derived output series
    pub name: String,
    /// Window the values are aligned to
    pub window: TimeWindow,
    /// One slot per window timestamp; `None` marks a missing sample
    pub values: Vec<Option<f64>>,
}

impl TimeSeries {
    /// Create a new time series
    pub fn new(name: impl Into<String>, window: TimeWindow, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            window,
            values,
        }
    }

    /// Number of value slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The last non-missing value, if any
    pub fn last_value(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// Subtraction over missing-aware samples: `None` if either operand is missing
pub fn safe_sub(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a - b),
        _ => None,
    }
}
