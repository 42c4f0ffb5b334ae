//! One-shot dataset loading and validation.

use std::path::PathBuf;

use leavecal_model::Dataset;
use tracing::{debug, info};

use crate::csv_read::read_calendar_csv;
use crate::error::IoError;
use crate::json_read::read_holiday_data;
use crate::validate::{validate_calendar, validate_holiday_data};

// ---------------------------------------------------------------------------
// LoadConfig
// ---------------------------------------------------------------------------

/// Where to find the static inputs and which year they describe.
///
/// The [`Default`] points at the file names the published dataset uses.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// The single calendar year the data covers.
    year: i32,
    /// `{ holidays, strategies }` JSON document.
    holidays: PathBuf,
    /// Government office calendar CSV.
    calendar: PathBuf,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            year: 2026,
            holidays: PathBuf::from("data/holidays.json"),
            calendar: PathBuf::from("115年中華民國政府行政機關辦公日曆表.csv"),
        }
    }
}

impl LoadConfig {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_holidays(mut self, path: impl Into<PathBuf>) -> Self {
        self.holidays = path.into();
        self
    }

    pub fn with_calendar(mut self, path: impl Into<PathBuf>) -> Self {
        self.calendar = path.into();
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &PathBuf {
        &self.holidays
    }

    pub fn calendar(&self) -> &PathBuf {
        &self.calendar
    }
}

/// Reads both inputs and validates them against the configured year.
///
/// # Errors
///
/// Any read or parse error from the two inputs, or a single
/// [`IoError::Validation`] listing every invariant violation found.
pub fn load_dataset(config: &LoadConfig) -> Result<Dataset, IoError> {
    debug!(path = %config.holidays.display(), "reading holiday data");
    let data = read_holiday_data(&config.holidays)?;
    debug!(path = %config.calendar.display(), "reading calendar csv");
    let calendar = read_calendar_csv(&config.calendar)?;

    let mut problems = validate_holiday_data(&data, config.year);
    problems.extend(validate_calendar(&calendar, config.year));
    problems.finish()?;

    let dataset = Dataset::new(config.year, data, calendar);
    info!(
        year = dataset.year,
        n_holidays = dataset.holidays.len(),
        n_strategies = dataset.strategies.len(),
        n_calendar_days = dataset.calendar.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
