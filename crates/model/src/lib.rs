//! # leavecal-model
//!
//! Read-only data model for one year of holidays: gazetted [`Holiday`]s,
//! per-date [`CalendarDay`] rows from the government calendar, and the
//! precomputed leave [`Strategy`] plans.
//!
//! Everything here is loaded once and never mutated. Loading and validation
//! live in `leavecal-io`.

mod calendar_day;
mod dataset;
mod holiday;
mod strategy;

pub use calendar_day::CalendarDay;
pub use dataset::{Dataset, HolidayData};
pub use holiday::Holiday;
pub use strategy::{Strategy, strip_decorations};
