//! Trend Consumer API
//!
//! Consumer configurations and config-driven entry points for the trend
//! estimation stack.
//!
//! This crate provides:
//! - Configuration types for extrapolation and threshold crossing
//! - Wrappers that resolve the bootstrap history through a
//!   [`BootstrapProvider`] and delegate to core
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use trend_core::{
    detrend_by_difference, detrend_by_line, detrend_series_by_line, extrapolate, fit_series,
    threshold_crossing, CalendarDelta, DifferenceDetrender, FittedLine, LineDetrender,
    MIN_SAMPLES,
};

// Re-export types from SPI
pub use trend_spi::{
    safe_sub, BootstrapProvider, CrossingEstimate, CrossingIntercepts, CrossingPoint, Detrender,
    Result, TimeSeries, TimeWindow, TrendError,
};

use serde::{Deserialize, Serialize};

/// Default size of the historical bootstrap window, in days
pub const BOOTSTRAP_DAYS: u32 = 60;

/// Default confidence level for prediction bands and crossing bounds
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Configuration for trend extrapolation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrapolateConfig {
    /// Days of history to fit against
    pub days: u32,
    /// Confidence level governing prediction band width
    pub confidence: f64,
}

impl Default for ExtrapolateConfig {
    fn default() -> Self {
        Self {
            days: BOOTSTRAP_DAYS,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// Configuration for threshold-crossing estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossingConfig {
    /// Value the trend is expected to reach
    pub threshold: f64,
    /// Days of history to fit against
    pub days: u32,
    /// Confidence level governing the crossing-time bounds
    pub confidence: f64,
    /// Opaque identifier echoed back in each estimate
    pub id: Option<String>,
}

impl CrossingConfig {
    /// Configuration for a given threshold with default window and
    /// confidence
    pub fn for_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            days: BOOTSTRAP_DAYS,
            confidence: DEFAULT_CONFIDENCE,
            id: None,
        }
    }
}

/// Extrapolate a batch of series, fetching the bootstrap history through
/// `provider`
pub fn extrapolate_with(
    provider: &dyn BootstrapProvider,
    targets: &[TimeSeries],
    config: &ExtrapolateConfig,
) -> Vec<TimeSeries> {
    let history = provider.fetch(targets, config.days);
    extrapolate(&history, targets, config.confidence)
}

/// Estimate threshold crossings for a batch of series, fetching the
/// bootstrap history through `provider`
pub fn threshold_crossing_with(
    provider: &dyn BootstrapProvider,
    targets: &[TimeSeries],
    config: &CrossingConfig,
) -> Vec<CrossingEstimate> {
    let history = provider.fetch(targets, config.days);
    threshold_crossing(
        &history,
        targets,
        config.threshold,
        config.confidence,
        config.id.as_deref(),
    )
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CrossingConfig, ExtrapolateConfig, BOOTSTRAP_DAYS, DEFAULT_CONFIDENCE};
    pub use trend_core::{
        detrend_by_difference, detrend_by_line, extrapolate, threshold_crossing, FittedLine,
    };
    pub use trend_spi::{
        BootstrapProvider, CrossingEstimate, Detrender, Result, TimeSeries, TimeWindow,
        TrendError,
    };
}
