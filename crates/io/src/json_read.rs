//! Holiday/strategy JSON document loading.

use std::path::Path;

use leavecal_model::HolidayData;
use tracing::debug;

use crate::error::IoError;

/// Parses the `{ holidays, strategies }` document.
///
/// # Errors
///
/// Returns [`IoError::Json`] on malformed input.
pub fn parse_holiday_data(text: &str) -> Result<HolidayData, IoError> {
    let data: HolidayData = serde_json::from_str(text)?;
    debug!(
        n_holidays = data.holidays.len(),
        n_strategies = data.strategies.len(),
        "parsed holiday data"
    );
    Ok(data)
}

/// Reads and parses the holiday document at `path`.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] when the file cannot
/// be read, and [`IoError::Json`] when it cannot be parsed.
pub fn read_holiday_data(path: &Path) -> Result<HolidayData, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::io(path, &e))?;
    parse_holiday_data(&text)
}
