//! Government office calendar CSV loading.
//!
//! The published file has one row per date with the columns
//! `西元日期` (YYYYMMDD), `星期`, `是否放假` (`2` = closed) and `備註`.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use leavecal_calendar::parse_compact_date;
use leavecal_model::CalendarDay;
use tracing::debug;

use crate::error::IoError;
use crate::validate::ValidationCollector;

pub const COL_DATE: &str = "西元日期";
pub const COL_WEEKDAY: &str = "星期";
pub const COL_DAY_OFF: &str = "是否放假";
pub const COL_NOTE: &str = "備註";

/// Value of the day-off column that marks a closed date.
const DAY_OFF_FLAG: &str = "2";

struct Columns {
    date: usize,
    weekday: Option<usize>,
    day_off: Option<usize>,
    note: Option<usize>,
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
}

fn field(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
}

/// Parses calendar rows from any reader. `source` names the input in errors.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] when the date column is absent,
/// [`IoError::Csv`] on malformed CSV, and [`IoError::Validation`] listing
/// every row whose date is missing or unparseable.
pub fn parse_calendar_csv<R: Read>(reader: R, source: &Path) -> Result<Vec<CalendarDay>, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns {
        date: find_column(&headers, COL_DATE).ok_or_else(|| IoError::MissingColumn {
            name: COL_DATE.to_string(),
            path: source.to_path_buf(),
        })?,
        weekday: find_column(&headers, COL_WEEKDAY),
        day_off: find_column(&headers, COL_DAY_OFF),
        note: find_column(&headers, COL_NOTE),
    };

    let mut days = Vec::new();
    let mut problems = ValidationCollector::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = i + 2;
        let raw_date = field(&record, Some(cols.date));
        if raw_date.is_empty() {
            problems.push(format!("line {line}: missing {COL_DATE}"));
            continue;
        }
        match parse_compact_date(raw_date) {
            Ok(date) => days.push(CalendarDay {
                date,
                day_of_week: field(&record, cols.weekday).to_string(),
                is_holiday: field(&record, cols.day_off) == DAY_OFF_FLAG,
                note: field(&record, cols.note).to_string(),
            }),
            Err(e) => problems.push(format!("line {line}: {e}")),
        }
    }
    problems.finish()?;

    debug!(n_days = days.len(), source = %source.display(), "parsed calendar csv");
    Ok(days)
}

/// Reads the calendar CSV at `path`.
///
/// # Errors
///
/// See [`parse_calendar_csv`]; also [`IoError::FileNotFound`] /
/// [`IoError::Io`] when the file cannot be opened.
pub fn read_calendar_csv(path: &Path) -> Result<Vec<CalendarDay>, IoError> {
    let file = std::fs::File::open(path).map_err(|e| IoError::io(path, &e))?;
    parse_calendar_csv(file, path)
}
