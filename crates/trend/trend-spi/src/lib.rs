//! Trend Service Provider Interface
//!
//! Defines the error taxonomy, shared data model, and trait contracts for
//! least-squares trend estimation over time series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{BootstrapProvider, Detrender};
pub use error::{Result, TrendError};
pub use model::{
    safe_sub, CrossingEstimate, CrossingIntercepts, CrossingPoint, TimeSeries, TimeWindow,
};
