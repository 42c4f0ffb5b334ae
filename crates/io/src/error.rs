//! Error types for leavecal-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the leavecal-io crate.
///
/// Covers file access, JSON and CSV decoding, calendar date parsing,
/// accumulated validation failures, and export problems.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error from `serde_json`.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Wraps an error from the `csv` crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error from the `rust_xlsxwriter` crate.
    #[error("xlsx error: {reason}")]
    Xlsx {
        /// Description of the underlying workbook failure.
        reason: String,
    },

    /// Wraps an error originating from the leavecal-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a required CSV column is absent from the header row.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when the host cannot provide what an exporter needs.
    #[error("export '{format}' needs unavailable capability: {capability}")]
    MissingCapability {
        /// Export format that was requested.
        format: String,
        /// Capability the host failed to provide.
        capability: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound { path }
        } else {
            IoError::Io {
                path,
                reason: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for IoError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        IoError::Xlsx {
            reason: e.to_string(),
        }
    }
}

impl From<leavecal_calendar::CalendarError> for IoError {
    fn from(e: leavecal_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}
