//! Zero-based month index for the single configured year.

use leavecal_calendar::CalendarError;

/// A month index in `0..=11` (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: Self = Self(0);
    pub const DECEMBER: Self = Self(11);

    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] outside `0..=11`.
    pub fn new(month: i32) -> Result<Self, CalendarError> {
        if (0..=11).contains(&month) {
            Ok(Self(month as u32))
        } else {
            Err(CalendarError::InvalidMonth { month })
        }
    }

    /// Clamps any integer into `0..=11`.
    pub fn clamped(month: i32) -> Self {
        Self(month.clamp(0, 11) as u32)
    }

    /// From a chrono month number (1..=12).
    pub fn from_month1(month: u32) -> Self {
        Self::clamped(month as i32 - 1)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Chrono month number (1..=12).
    pub fn month1(self) -> u32 {
        self.0 + 1
    }

    /// All twelve months in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..12).map(Self)
    }
}
