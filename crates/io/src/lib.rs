//! # leavecal-io
//!
//! Reads the static holiday JSON and government calendar CSV into a
//! validated [`Dataset`], renders exports through the [`Exporter`] seam,
//! and stores the local theme preference.
//!
//! [`Dataset`]: leavecal_model::Dataset

mod csv_read;
mod document;
mod error;
mod export;
mod ical;
mod json_read;
mod manifest;
mod prefs;
mod reader;
mod spreadsheet;
mod validate;
mod writer;

pub use csv_read::{
    COL_DATE, COL_DAY_OFF, COL_NOTE, COL_WEEKDAY, parse_calendar_csv, read_calendar_csv,
};
pub use document::{DocumentExporter, FIRST_PAGE_LINES, PAGE_LINES, layout_pages, strategy_line};
pub use error::IoError;
pub use export::{
    Artifact, BuiltinCapabilities, Capability, CapabilityProvider, ExportContext, ExportFormat,
    ExportSettings, Exporter, exporter_for, run_export,
};
pub use ical::{ICalendarExporter, escape_text, render_ical};
pub use json_read::{parse_holiday_data, read_holiday_data};
pub use manifest::CacheManifest;
pub use prefs::{PreferenceStore, Preferences, Theme};
pub use reader::{LoadConfig, load_dataset};
pub use spreadsheet::{
    Cell, STRATEGY_SHEET, SpreadsheetExporter, calendar_rows, calendar_sheet_name, strategy_rows,
};
pub use writer::write_artifacts;
