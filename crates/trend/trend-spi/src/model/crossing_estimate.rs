//! Threshold crossing estimate model

use serde::{Deserialize, Serialize};

/// A single crossing-time solution: the raw timestamp plus its
/// human-readable distance from the end of the target series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingPoint {
    /// Crossing timestamp, rounded to the nearest second
    pub timestamp: i64,
    /// Formatted duration from the target series end ("2 months, 5 days");
    /// `None` when the delta is zero in every unit
    pub eta: Option<String>,
}

/// Crossing times for the mean-response line and its prediction bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingIntercepts {
    pub lower: CrossingPoint,
    pub trend: CrossingPoint,
    pub upper: CrossingPoint,
}

/// Structured result of a threshold-crossing estimation for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingEstimate {
    /// Crossing times for the trend line and its confidence bounds
    pub intercepts: CrossingIntercepts,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Fitted slope (metric units per time unit)
    pub slope: f64,
    /// Value of the trend line at the end of the target window
    pub trend_now: f64,
    /// The threshold the crossing was solved for
    pub threshold: f64,
    /// Last non-missing value in the target series
    pub last: Option<f64>,
    /// Caller-supplied identifier, echoed back verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_estimate() -> CrossingEstimate {
        CrossingEstimate {
            intercepts: CrossingIntercepts {
                lower: CrossingPoint {
                    timestamp: 2_000,
                    eta: Some("16 hours".to_string()),
                },
                trend: CrossingPoint {
                    timestamp: 1_500,
                    eta: Some("12 hours".to_string()),
                },
                upper: CrossingPoint {
                    timestamp: 1_000,
                    eta: Some("8 hours".to_string()),
                },
            },
            r_squared: 0.98,
            slope: 1.5,
            trend_now: 42.0,
            threshold: 100.0,
            last: Some(41.0),
            id: None,
        }
    }

    #[test]
    fn test_estimate_fields() {
        let estimate = sample_estimate();
        assert_eq!(estimate.intercepts.trend.timestamp, 1_500);
        assert_eq!(estimate.threshold, 100.0);
        assert_eq!(estimate.last, Some(41.0));
        assert!(estimate.id.is_none());
    }

    #[test]
    fn test_estimate_serialization_skips_missing_id() {
        let estimate = sample_estimate();
        let json = serde_json::to_string(&estimate).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"intercepts\""));
        assert!(json.contains("\"trend_now\""));
    }

    #[test]
    fn test_estimate_roundtrip_with_id() {
        let mut estimate = sample_estimate();
        estimate.id = Some("disk-root".to_string());
        let json = serde_json::to_string(&estimate).unwrap();
        let back: CrossingEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }
}
