//! Trait for detrending transforms

use crate::error::Result;
use crate::model::TimeSeries;

/// Trait for transforms that remove a trend from a series
pub trait Detrender: Send + Sync {
    /// Produce the detrended variant of `series`
    fn detrend(&self, series: &TimeSeries) -> Result<TimeSeries>;

    /// Name of the transform
    fn name(&self) -> &str;
}
