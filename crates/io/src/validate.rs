//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus checks over the loaded
//! holiday data and calendar rows.

use std::collections::BTreeSet;

use chrono::Datelike;
use leavecal_model::{CalendarDay, HolidayData};
use tracing::warn;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
#[derive(Debug, Default)]
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Moves every error from `other` into `self`.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise every message joined
    /// with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Holiday data checks
// ---------------------------------------------------------------------------

/// Checks strategy invariants and that every date lies in `year`.
///
/// Leave days outside their strategy's range are logged, not rejected.
pub(crate) fn validate_holiday_data(data: &HolidayData, year: i32) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for h in &data.holidays {
        if h.date.year() != year {
            c.push(format!("holiday '{}' on {} is outside {year}", h.name, h.date));
        }
    }

    let mut ids = BTreeSet::new();
    for s in &data.strategies {
        if !ids.insert(s.id.as_str()) {
            c.push(format!("duplicate strategy id '{}'", s.id));
        }
        if s.end_date < s.start_date {
            c.push(format!(
                "strategy '{}' ends ({}) before it starts ({})",
                s.id, s.end_date, s.start_date
            ));
        }
        if s.start_date.year() != year || s.end_date.year() != year {
            c.push(format!("strategy '{}' is outside {year}", s.id));
        }
        if s.total_days == 0 {
            c.push(format!("strategy '{}' has zero total days", s.id));
        }
        if s.total_days < s.leave_count {
            c.push(format!(
                "strategy '{}' total days {} < leave count {}",
                s.id, s.total_days, s.leave_count
            ));
        }
        if !s.cp_value.is_finite() || s.cp_value < 0.0 {
            c.push(format!("strategy '{}' has invalid cp value {}", s.id, s.cp_value));
        }
        for day in &s.leave_days {
            if !s.contains(*day) {
                warn!(strategy = %s.id, %day, "leave day outside strategy range");
            }
        }
    }

    c
}

/// Checks that calendar rows are unique and inside `year`.
pub(crate) fn validate_calendar(days: &[CalendarDay], year: i32) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    let mut seen = BTreeSet::new();

    for (i, day) in days.iter().enumerate() {
        if day.date.year() != year {
            c.push(format!("calendar row {i} date {} is outside {year}", day.date));
        }
        if !seen.insert(day.date) {
            c.push(format!("calendar row {i} repeats date {}", day.date));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
