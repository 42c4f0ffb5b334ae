//! Error types for the leavecal-calendar crate.

/// Error type for all fallible operations in the leavecal-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string cannot be parsed as a calendar date.
    #[error("invalid date: '{input}' (expected {expected})")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
        /// Human-readable description of the accepted layout.
        expected: &'static str,
    },

    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month index: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month index that was provided.
        month: i32,
    },
}
