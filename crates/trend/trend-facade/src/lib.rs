//! Trend Facade
//!
//! High-level API for least-squares trend estimation. Re-exports all public
//! types from the trend stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use trend_api::*;

// Explicit re-exports for documentation
pub use trend_api::prelude;

// Re-export core modules for direct access
pub use trend_core::{crossing, delta, detrend, regression};

// Re-export SPI traits and models
pub use trend_spi::{
    BootstrapProvider, CrossingEstimate, CrossingIntercepts, CrossingPoint, Detrender,
    TimeSeries, TimeWindow, TrendError,
};
