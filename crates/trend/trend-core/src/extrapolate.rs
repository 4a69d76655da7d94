//! Trend extrapolation over a future time window
//!
//! Fits a line to a historical ("bootstrap") window and evaluates the
//! mean response and its prediction bands over a target window.

use tracing::debug;
use trend_spi::{Result, TimeSeries};

use crate::regression::FittedLine;

/// Fit a line to a series, using its window timestamps as the x domain.
///
/// Series longer than their window are truncated and missing samples are
/// dropped pairwise inside [`FittedLine::new`].
pub fn fit_series(series: &TimeSeries) -> Result<FittedLine> {
    let x: Vec<Option<f64>> = series
        .window
        .timestamps()
        .map(|t| Some(t as f64))
        .collect();
    FittedLine::new(&x, &series.values)
}

/// Extrapolate each history/target pair into three series over the target
/// window: the mean response, and the lower and upper prediction bands at
/// the given confidence level.
///
/// Pairing is positional and stops at the shorter input. A pair whose fit
/// fails contributes no output and does not disturb the remaining pairs.
pub fn extrapolate(
    history: &[TimeSeries],
    targets: &[TimeSeries],
    confidence: f64,
) -> Vec<TimeSeries> {
    let mut result = Vec::new();
    for (hist, target) in history.iter().zip(targets) {
        let line = match fit_series(hist) {
            Ok(line) => line,
            Err(err) => {
                debug!(series = %target.name, error = %err, "skipping extrapolation: fit failed");
                continue;
            }
        };
        let offset = match line.band_offset(confidence) {
            Ok(offset) => offset,
            Err(err) => {
                debug!(series = %target.name, error = %err, "skipping extrapolation: bad band");
                continue;
            }
        };

        let mean: Vec<Option<f64>> = target
            .window
            .timestamps()
            .map(|t| Some(line.line_at(t as f64)))
            .collect();
        let lower: Vec<Option<f64>> = mean.iter().map(|v| v.map(|v| v - offset)).collect();
        let upper: Vec<Option<f64>> = mean.iter().map(|v| v.map(|v| v + offset)).collect();

        result.push(TimeSeries::new(target.name.clone(), target.window, mean));
        result.push(TimeSeries::new(
            format!("{}: lower", target.name),
            target.window,
            lower,
        ));
        result.push(TimeSeries::new(
            format!("{}: upper", target.name),
            target.window,
            upper,
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use trend_spi::TimeWindow;

    fn linear_series(name: &str, window: TimeWindow, slope: f64, intercept: f64) -> TimeSeries {
        let values = window
            .timestamps()
            .map(|t| Some(slope * t as f64 + intercept))
            .collect();
        TimeSeries::new(name, window, values)
    }

    #[test]
    fn test_extrapolates_three_series_per_input() {
        let hist = linear_series("metric", TimeWindow::new(0, 600, 60), 0.5, 10.0);
        let target = linear_series("metric", TimeWindow::new(600, 900, 60), 0.5, 10.0);

        let out = extrapolate(&[hist], &[target.clone()], 0.95);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].name, "metric");
        assert_eq!(out[1].name, "metric: lower");
        assert_eq!(out[2].name, "metric: upper");
        for series in &out {
            assert_eq!(series.window, target.window);
            assert_eq!(series.len(), target.window.len());
        }
    }

    #[test]
    fn test_mean_series_continues_the_line() {
        let hist = linear_series("metric", TimeWindow::new(0, 600, 60), 0.5, 10.0);
        let target = linear_series("metric", TimeWindow::new(600, 900, 60), 0.5, 10.0);

        let out = extrapolate(&[hist], &[target], 0.95);
        let mean = &out[0];
        for (t, v) in mean.window.timestamps().zip(&mean.values) {
            let expected = 0.5 * t as f64 + 10.0;
            assert!((v.unwrap() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bands_bracket_mean() {
        // Add alternating noise so the residual sigma is non-zero
        let window = TimeWindow::new(0, 600, 60);
        let values: Vec<Option<f64>> = window
            .timestamps()
            .enumerate()
            .map(|(i, t)| Some(0.5 * t as f64 + if i % 2 == 0 { 1.0 } else { -1.0 }))
            .collect();
        let hist = TimeSeries::new("metric", window, values);
        let target = linear_series("metric", TimeWindow::new(600, 900, 60), 0.5, 0.0);

        let out = extrapolate(&[hist], &[target], 0.95);
        for i in 0..out[0].len() {
            let mean = out[0].values[i].unwrap();
            let lower = out[1].values[i].unwrap();
            let upper = out[2].values[i].unwrap();
            assert!(lower < mean && mean < upper);
        }
    }

    #[test]
    fn test_failed_fit_is_skipped_without_aborting_batch() {
        let good_hist = linear_series("good", TimeWindow::new(0, 600, 60), 0.5, 10.0);
        let flat_hist = linear_series("flat", TimeWindow::new(0, 600, 60), 0.0, 5.0);
        let good_target = linear_series("good", TimeWindow::new(600, 900, 60), 0.5, 10.0);
        let flat_target = linear_series("flat", TimeWindow::new(600, 900, 60), 0.0, 5.0);

        let out = extrapolate(
            &[flat_hist, good_hist],
            &[flat_target, good_target],
            0.95,
        );
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].name, "good");
    }

    #[test]
    fn test_pairing_stops_at_shorter_input() {
        let hist = linear_series("a", TimeWindow::new(0, 600, 60), 0.5, 10.0);
        let t1 = linear_series("a", TimeWindow::new(600, 900, 60), 0.5, 10.0);
        let t2 = linear_series("b", TimeWindow::new(600, 900, 60), 0.5, 10.0);

        let out = extrapolate(&[hist], &[t1, t2], 0.95);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_missing_history_samples_are_tolerated() {
        let window = TimeWindow::new(0, 600, 60);
        let mut values: Vec<Option<f64>> = window
            .timestamps()
            .map(|t| Some(0.5 * t as f64 + 10.0))
            .collect();
        values[2] = None;
        values[7] = None;
        let hist = TimeSeries::new("metric", window, values);
        let target = linear_series("metric", TimeWindow::new(600, 900, 60), 0.5, 10.0);

        let out = extrapolate(&[hist], &[target], 0.95);
        assert_eq!(out.len(), 3);
        assert!((out[0].values[0].unwrap() - (0.5 * 600.0 + 10.0)).abs() < 1e-6);
    }
}
