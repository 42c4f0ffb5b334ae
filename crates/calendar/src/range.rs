//! Inclusive day counts and date ranges.

use chrono::{Days, NaiveDate};

/// Number of calendar days from `a` to `b`, counting both ends.
///
/// Order-independent: `days_between(a, b) == days_between(b, a)`, and a
/// date compared to itself counts as one day.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs() + 1
}

/// Every date from `start` to `end` inclusive. Empty when `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The day after `date`.
///
/// Saturates at [`NaiveDate::MAX`].
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}
