//! # leavecal-calendar
//!
//! Pure Gregorian date helpers shared by every leavecal crate.
//!
//! ## Quick Start
//!
//! ```ignore
//! use leavecal_calendar::{DateFormat, format_date, parse_iso_date, weekday_label};
//!
//! let date = parse_iso_date("2026-10-06").unwrap();
//! assert_eq!(format_date(date, DateFormat::MonthDayZh), "10月6日");
//! assert_eq!(weekday_label(date), "二");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Parsing, weekday labels, weekend and "today" tests |
//! | `format` | Display formats for ISO dates |
//! | `range` | Inclusive day counts and date ranges |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod range;

pub use date::{
    is_same_month, is_today, is_weekend, parse_compact_date, parse_iso_date, today_local,
    weekday_label,
};
pub use error::CalendarError;
pub use format::{DateFormat, format_date};
pub use range::{date_range, days_between, next_day};
