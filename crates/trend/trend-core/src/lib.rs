//! Trend Core
//!
//! Least-squares regression engine and the trend operations built on it:
//! extrapolation with prediction bands, threshold-crossing estimation, and
//! detrending.

pub mod crossing;
pub mod delta;
pub mod detrend;
pub mod extrapolate;
pub mod regression;

// Re-export SPI types for implementations
pub use trend_spi::{
    safe_sub, BootstrapProvider, CrossingEstimate, CrossingIntercepts, CrossingPoint, Detrender,
    Result, TimeSeries, TimeWindow, TrendError,
};

// Re-export main types and entry points
pub use crossing::threshold_crossing;
pub use delta::CalendarDelta;
pub use detrend::{
    detrend_by_difference, detrend_by_line, detrend_series_by_line, DifferenceDetrender,
    LineDetrender,
};
pub use extrapolate::{extrapolate, fit_series};
pub use regression::{FittedLine, MIN_SAMPLES};
