//! Parsing and single-date predicates.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::error::CalendarError;

const WEEKDAY_LABELS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `s` is not a valid date in that
/// layout.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        input: s.to_string(),
        expected: "YYYY-MM-DD",
    })
}

/// Parses a compact `YYYYMMDD` date, as used by the government calendar CSV.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `s` is not exactly eight digits
/// forming a valid date.
pub fn parse_compact_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let s = s.trim();
    let invalid = || CalendarError::InvalidDate {
        input: s.to_string(),
        expected: "YYYYMMDD",
    };
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| invalid())
}

/// Returns the single-character weekday label (`日` for Sunday through `六`
/// for Saturday).
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Returns `true` for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calendar-date equality against `today`.
///
/// Callers pass the viewer's local date (see [`today_local`]) so the test
/// never depends on the time of day.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Returns `true` when both dates fall in the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The current calendar date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
