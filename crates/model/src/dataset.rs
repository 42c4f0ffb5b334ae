//! Aggregate containers for the loaded data.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar_day::CalendarDay;
use crate::holiday::Holiday;
use crate::strategy::Strategy;

/// The `{ holidays, strategies }` JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidayData {
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// Everything the application reads at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub strategies: Vec<Strategy>,
    pub calendar: Vec<CalendarDay>,
}

impl Dataset {
    pub fn new(year: i32, data: HolidayData, calendar: Vec<CalendarDay>) -> Self {
        Self {
            year,
            holidays: data.holidays,
            strategies: data.strategies,
            calendar,
        }
    }

    /// Calendar row for `date`, if the CSV covered it.
    pub fn calendar_day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.calendar.iter().find(|d| d.date == date)
    }

    /// First gazetted holiday on `date`.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Union of every strategy's suggested leave days.
    pub fn leave_days(&self) -> BTreeSet<NaiveDate> {
        self.strategies
            .iter()
            .flat_map(|s| s.leave_days.iter().copied())
            .collect()
    }
}
