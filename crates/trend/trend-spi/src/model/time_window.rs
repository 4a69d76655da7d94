//! Time window model

use serde::{Deserialize, Serialize};

/// An inclusive-start, exclusive-end timestamp range sampled every `step` units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First timestamp in the window
    pub start: i64,
    /// One step past the last timestamp in the window
    pub end: i64,
    /// Spacing between consecutive timestamps
    pub step: i64,
}

impl TimeWindow {
    /// Create a new time window
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        Self { start, end, step }
    }

    /// Iterate the timestamps in the window: `start, start+step, ..` up to
    /// but excluding `end`. Non-positive steps yield the start timestamp
    /// spacing of 1 rather than panicking.
    pub fn timestamps(&self) -> impl Iterator<Item = i64> {
        (self.start..self.end).step_by(self.step.max(1) as usize)
    }

    /// Number of timestamps in the window
    pub fn len(&self) -> usize {
        self.timestamps().count()
    }

    /// Whether the window contains no timestamps
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The same window with its start advanced by one step
    pub fn shifted_by_one_step(&self) -> Self {
        Self {
            start: self.start + self.step,
            end: self.end,
            step: self.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_exclusive_end() {
        let window = TimeWindow::new(0, 60, 15);
        let ts: Vec<i64> = window.timestamps().collect();
        assert_eq!(ts, vec![0, 15, 30, 45]);
    }

    #[test]
    fn test_len_matches_timestamps() {
        let window = TimeWindow::new(100, 160, 10);
        assert_eq!(window.len(), window.timestamps().count());
        assert_eq!(window.len(), 6);
    }

    #[test]
    fn test_empty_window() {
        let window = TimeWindow::new(50, 50, 10);
        assert!(window.is_empty());
        assert_eq!(window.timestamps().count(), 0);
    }

    #[test]
    fn test_reversed_window_yields_nothing() {
        let window = TimeWindow::new(100, 50, 10);
        assert!(window.is_empty());
        assert_eq!(window.timestamps().count(), 0);
    }

    #[test]
    fn test_shifted_by_one_step() {
        let window = TimeWindow::new(0, 60, 15);
        let shifted = window.shifted_by_one_step();
        assert_eq!(shifted.start, 15);
        assert_eq!(shifted.end, 60);
        assert_eq!(shifted.len(), window.len() - 1);
    }
}
