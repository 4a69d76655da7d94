//! Basic trend estimation example: fit a month of disk usage, project it
//! three days ahead, and estimate when it crosses 90% capacity.

use trend_facade::{extrapolate, threshold_crossing, TimeSeries, TimeWindow};

const HOUR: i64 = 3_600;
const DAY: i64 = 24 * HOUR;

fn main() {
    // A month of hourly samples growing ~0.8%/day with a small wobble
    let history_window = TimeWindow::new(0, 30 * DAY, HOUR);
    let values = history_window
        .timestamps()
        .enumerate()
        .map(|(i, t)| Some(55.0 + 0.8 * t as f64 / DAY as f64 + ((i % 6) as f64 - 2.5) * 0.1))
        .collect();
    let history = TimeSeries::new("disk.percent_used", history_window, values);

    let target_window = TimeWindow::new(30 * DAY, 33 * DAY, HOUR);
    let target = TimeSeries::new(
        "disk.percent_used",
        target_window,
        vec![None; target_window.len()],
    );

    let projected = extrapolate(&[history.clone()], &[target.clone()], 0.95);
    for series in &projected {
        println!(
            "{}: {:.2} .. {:.2}",
            series.name,
            series.values.first().unwrap().unwrap(),
            series.values.last().unwrap().unwrap(),
        );
    }

    let estimates = threshold_crossing(&[history], &[target], 90.0, 0.95, Some("host-01"));
    for estimate in &estimates {
        println!(
            "{}: crosses {} in {} (r^2 = {:.4})",
            estimate.id.as_deref().unwrap_or("?"),
            estimate.threshold,
            estimate
                .intercepts
                .trend
                .eta
                .as_deref()
                .unwrap_or("no time at all"),
            estimate.r_squared,
        );
    }
}
