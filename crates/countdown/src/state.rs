//! Countdown display state at a given instant.

use chrono::{NaiveDateTime, NaiveTime};

use crate::select::Selection;

const SECS_PER_DAY: i64 = 86_400;

/// Non-negative whole seconds left, with a days/hours/minutes/seconds view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining {
    secs: i64,
}

impl Remaining {
    /// Negative input clamps to zero.
    pub fn from_seconds(secs: i64) -> Self {
        Self { secs: secs.max(0) }
    }

    pub fn between(now: NaiveDateTime, until: NaiveDateTime) -> Self {
        Self::from_seconds((until - now).num_seconds())
    }

    pub fn total_seconds(self) -> i64 {
        self.secs
    }

    pub fn is_zero(self) -> bool {
        self.secs == 0
    }

    pub fn days(self) -> i64 {
        self.secs / SECS_PER_DAY
    }

    pub fn hours(self) -> i64 {
        (self.secs % SECS_PER_DAY) / 3600
    }

    pub fn minutes(self) -> i64 {
        (self.secs % 3600) / 60
    }

    pub fn seconds(self) -> i64 {
        self.secs % 60
    }
}

/// What the countdown shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownState<'a> {
    /// No basic holiday remains in the configured year.
    NoMoreHolidays,
    /// Counting down to `selection.target` starting at 00:00:00.
    Upcoming {
        selection: Selection<'a>,
        remaining: Remaining,
    },
    /// Inside `selection.target`; counting down to its last day at 23:59:59.
    InProgress {
        selection: Selection<'a>,
        remaining: Remaining,
    },
}

impl<'a> CountdownState<'a> {
    pub fn selection(&self) -> Option<&Selection<'a>> {
        match self {
            Self::NoMoreHolidays => None,
            Self::Upcoming { selection, .. } | Self::InProgress { selection, .. } => {
                Some(selection)
            }
        }
    }

    pub fn remaining(&self) -> Option<Remaining> {
        match self {
            Self::NoMoreHolidays => None,
            Self::Upcoming { remaining, .. } | Self::InProgress { remaining, .. } => {
                Some(*remaining)
            }
        }
    }
}

pub(crate) fn block_start(selection: &Selection<'_>) -> NaiveDateTime {
    selection.target.start_date.and_time(NaiveTime::MIN)
}

pub(crate) fn block_end(selection: &Selection<'_>) -> NaiveDateTime {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    selection.target.end_date.and_time(last_second)
}

/// Display state for `selection` at local time `now`.
pub fn state_at<'a>(selection: Option<Selection<'a>>, now: NaiveDateTime) -> CountdownState<'a> {
    let Some(selection) = selection else {
        return CountdownState::NoMoreHolidays;
    };
    let start = block_start(&selection);
    if now >= start {
        CountdownState::InProgress {
            selection,
            remaining: Remaining::between(now, block_end(&selection)),
        }
    } else {
        CountdownState::Upcoming {
            selection,
            remaining: Remaining::between(now, start),
        }
    }
}
