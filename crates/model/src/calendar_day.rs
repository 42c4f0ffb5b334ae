use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the government office calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Weekday label as published (`日`..`六`).
    pub day_of_week: String,
    /// `true` when offices are closed on this date.
    pub is_holiday: bool,
    /// Free-text note, usually the holiday name. Empty when absent.
    #[serde(default)]
    pub note: String,
}

impl CalendarDay {
    /// Returns the note, or `None` when it is blank.
    pub fn note(&self) -> Option<&str> {
        let note = self.note.trim();
        (!note.is_empty()).then_some(note)
    }
}
