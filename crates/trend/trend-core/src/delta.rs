//! Calendar-aware relative deltas between unix timestamps
//!
//! Crossing times are reported as "1 years, 2 months, 5 hours" style
//! strings; months and years follow calendar arithmetic rather than fixed
//! unit sizes.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime};

/// The relative delta between two timestamps, split into calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    /// True when the second timestamp precedes the first
    pub negative: bool,
}

impl CalendarDelta {
    /// Compute the delta from `from` to `to` (unix seconds).
    ///
    /// The unit fields always describe the absolute interval; direction is
    /// carried in `negative`. Minutes and seconds are intentionally not
    /// reported, matching the hour-granularity of crossing estimates.
    pub fn between(from: i64, to: i64) -> Self {
        let negative = to < from;
        let (a, b) = if negative { (to, from) } else { (from, to) };
        let a = to_naive(a);
        let b = to_naive(b);

        let mut total_months =
            (b.year() as i64 - a.year() as i64) * 12 + (b.month() as i64 - a.month() as i64);
        while total_months > 0 && add_months(a, total_months) > b {
            total_months -= 1;
        }
        let shifted = add_months(a, total_months);

        let rest = b - shifted;
        let days = rest.num_days();
        let hours = (rest - Duration::days(days)).num_hours();

        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
            hours,
            negative,
        }
    }

    /// Whether every unit is zero
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && self.hours == 0
    }

    /// Join the non-zero units into a human-readable string.
    ///
    /// Returns `None` when the delta reduces to zero in every unit. Past
    /// crossings are not clamped or rejected; the absolute interval is
    /// formatted with a leading minus sign.
    pub fn format(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.years > 0 {
            parts.push(format!("{} years", self.years));
        }
        if self.months > 0 {
            parts.push(format!("{} months", self.months));
        }
        if self.days > 0 {
            parts.push(format!("{} days", self.days));
        }
        if self.hours > 0 {
            parts.push(format!("{} hours", self.hours));
        }
        if parts.is_empty() {
            return None;
        }
        let joined = parts.join(", ");
        if self.negative {
            Some(format!("-{joined}"))
        } else {
            Some(joined)
        }
    }
}

fn to_naive(timestamp: i64) -> NaiveDateTime {
    // Out-of-range timestamps collapse to the epoch; crossing estimates
    // that far out carry no useful calendar information anyway.
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

fn add_months(base: NaiveDateTime, months: i64) -> NaiveDateTime {
    debug_assert!(months >= 0);
    base.checked_add_months(Months::new(months as u32))
        .unwrap_or(base)
}
