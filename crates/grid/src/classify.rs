//! Per-date classification.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use leavecal_calendar::{is_today, is_weekend};
use leavecal_model::Dataset;

/// Label shown on a suggested leave day that has no note of its own.
pub const LEAVE_LABEL: &str = "請假";

/// Visual classification of one date.
///
/// Priority when several apply: `SuggestedLeave`, then `Today`, then
/// `Holiday` / `Weekend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayTag {
    Today,
    SuggestedLeave,
    Holiday,
    Weekend,
    Normal,
}

impl DayTag {
    /// Holidays and weekends share one style.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::SuggestedLeave => "leave",
            Self::Holiday | Self::Weekend => "day-off",
            Self::Normal => "normal",
        }
    }

    pub fn is_day_off(self) -> bool {
        matches!(self, Self::Holiday | Self::Weekend)
    }
}

/// Inputs needed to classify and label dates.
#[derive(Debug, Clone)]
pub struct GridContext<'a> {
    dataset: &'a Dataset,
    leave_days: BTreeSet<NaiveDate>,
    today: NaiveDate,
    show_leave_days: bool,
}

impl<'a> GridContext<'a> {
    /// Suggested leave days start hidden.
    pub fn new(dataset: &'a Dataset, today: NaiveDate) -> Self {
        Self {
            dataset,
            leave_days: dataset.leave_days(),
            today,
            show_leave_days: false,
        }
    }

    pub fn with_show_leave_days(mut self, show: bool) -> Self {
        self.show_leave_days = show;
        self
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn leave_days(&self) -> &BTreeSet<NaiveDate> {
        &self.leave_days
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dataset
            .calendar_day(date)
            .is_some_and(|d| d.is_holiday)
            || self.dataset.holiday_on(date).is_some()
    }

    pub fn classify(&self, date: NaiveDate) -> DayTag {
        if self.show_leave_days && self.leave_days.contains(&date) {
            DayTag::SuggestedLeave
        } else if is_today(date, self.today) {
            DayTag::Today
        } else if self.is_holiday(date) {
            DayTag::Holiday
        } else if is_weekend(date) {
            DayTag::Weekend
        } else {
            DayTag::Normal
        }
    }

    /// Calendar note, else holiday name, else the leave marker for a
    /// visible suggested leave day.
    pub fn label(&self, date: NaiveDate, tag: DayTag) -> Option<String> {
        self.dataset
            .calendar_day(date)
            .and_then(|d| d.note())
            .map(str::to_string)
            .or_else(|| self.dataset.holiday_on(date).map(|h| h.name.clone()))
            .or_else(|| (tag == DayTag::SuggestedLeave).then(|| LEAVE_LABEL.to_string()))
    }
}
