//! Model module containing data structures

mod crossing_estimate;
mod time_series;
mod time_window;

pub use crossing_estimate::{CrossingEstimate, CrossingIntercepts, CrossingPoint};
pub use time_series::{safe_sub, TimeSeries};
pub use time_window::TimeWindow;
