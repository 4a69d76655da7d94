//! Threshold crossing estimation
//!
//! Solves the fitted trend line (and its prediction bands) for the time at
//! which it reaches a caller-supplied threshold, and reports the result as
//! a duration from the end of the target series.

use tracing::debug;
use trend_spi::{
    CrossingEstimate, CrossingIntercepts, CrossingPoint, Result, TimeSeries,
};

use crate::delta::CalendarDelta;
use crate::extrapolate::fit_series;

/// Estimate when each fitted trend will cross `threshold`.
///
/// One [`CrossingEstimate`] is produced per history/target pair; pairing is
/// positional and stops at the shorter input. Pairs whose fit or inversion
/// fails are skipped whole, never reported partially.
pub fn threshold_crossing(
    history: &[TimeSeries],
    targets: &[TimeSeries],
    threshold: f64,
    confidence: f64,
    id: Option<&str>,
) -> Vec<CrossingEstimate> {
    let mut result = Vec::new();
    for (hist, target) in history.iter().zip(targets) {
        match estimate_one(hist, target, threshold, confidence, id) {
            Ok(estimate) => result.push(estimate),
            Err(err) => {
                debug!(series = %target.name, error = %err, "skipping crossing estimate");
            }
        }
    }
    result
}

fn estimate_one(
    hist: &TimeSeries,
    target: &TimeSeries,
    threshold: f64,
    confidence: f64,
    id: Option<&str>,
) -> Result<CrossingEstimate> {
    let line = fit_series(hist)?;
    let end = target.window.end;

    let trend = crossing_point(end, line.solve_line(threshold)?);
    let lower = crossing_point(end, line.solve_band_lower(confidence, threshold)?);
    let upper = crossing_point(end, line.solve_band_upper(confidence, threshold)?);

    Ok(CrossingEstimate {
        intercepts: CrossingIntercepts {
            lower,
            trend,
            upper,
        },
        r_squared: line.r_squared(),
        slope: line.slope(),
        trend_now: line.line_at(end as f64),
        threshold,
        last: target.last_value(),
        id: id.map(str::to_string),
    })
}

fn crossing_point(from: i64, at: f64) -> CrossingPoint {
    let timestamp = at.round() as i64;
    CrossingPoint {
        timestamp,
        eta: CalendarDelta::between(from, timestamp).format(),
    }
}
