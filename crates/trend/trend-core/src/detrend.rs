//! Detrending transforms
//!
//! Two ways to remove a trend from a series: first-order differencing, and
//! subtracting a least-squares line fitted to the series itself.

use tracing::debug;
use trend_spi::{safe_sub, Detrender, Result, TimeSeries, TimeWindow};

use crate::extrapolate::fit_series;

/// First-order difference series: value `i` becomes `series[i] - series[i-1]`.
///
/// The output window starts one step later than the input (the first
/// timestamp has no predecessor) and holds one fewer sample. Differences
/// touching a missing sample are missing themselves.
pub fn detrend_by_difference(series: &TimeSeries) -> TimeSeries {
    let values: Vec<Option<f64>> = series
        .values
        .windows(2)
        .map(|pair| safe_sub(pair[1], pair[0]))
        .collect();
    TimeSeries::new(
        series.name.clone(),
        series.window.shifted_by_one_step(),
        values,
    )
}

/// Residual series: fit a line to the series against its own window and
/// emit `y - line(x)` for every cleaned pair.
///
/// The output is aligned to the cleaned sample domain, so it is shorter
/// than the input when missing samples were dropped; interior gaps compact
/// onto the fitted step grid.
pub fn detrend_by_line(series: &TimeSeries) -> Result<TimeSeries> {
    let line = fit_series(series)?;
    let values: Vec<Option<f64>> = line
        .x_data()
        .iter()
        .zip(line.y_data())
        .map(|(&x, &y)| Some(y - line.line_at(x)))
        .collect();

    let step = series.window.step;
    let start = line
        .x_data()
        .first()
        .map(|&x| x as i64)
        .unwrap_or(series.window.start);
    let window = TimeWindow::new(start, start + step * values.len() as i64, step);
    Ok(TimeSeries::new(series.name.clone(), window, values))
}

/// Batch line detrending; series whose fit fails are skipped
pub fn detrend_series_by_line(series_list: &[TimeSeries]) -> Vec<TimeSeries> {
    series_list
        .iter()
        .filter_map(|series| match detrend_by_line(series) {
            Ok(out) => Some(out),
            Err(err) => {
                debug!(series = %series.name, error = %err, "skipping line detrend");
                None
            }
        })
        .collect()
}

/// [`Detrender`] backed by first-order differencing
#[derive(Debug, Default)]
pub struct DifferenceDetrender;

impl Detrender for DifferenceDetrender {
    fn detrend(&self, series: &TimeSeries) -> Result<TimeSeries> {
        Ok(detrend_by_difference(series))
    }

    fn name(&self) -> &str {
        "difference"
    }
}

/// [`Detrender`] backed by least-squares line subtraction
#[derive(Debug, Default)]
pub struct LineDetrender;

impl Detrender for LineDetrender {
    fn detrend(&self, series: &TimeSeries) -> Result<TimeSeries> {
        detrend_by_line(series)
    }

    fn name(&self) -> &str {
        "least-squares"
    }
}
