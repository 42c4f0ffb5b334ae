//! Export adapter seam.
//!
//! Each [`Exporter`] is a pure format translator: it declares the
//! [`Capability`] it needs and renders [`Artifact`]s in memory. The host
//! resolves capabilities before invocation and decides where artifacts go.

use std::fmt;

use chrono::{DateTime, Utc};
use leavecal_model::Dataset;
use tracing::{debug, info_span};

use crate::document::DocumentExporter;
use crate::error::IoError;
use crate::ical::ICalendarExporter;
use crate::spreadsheet::SpreadsheetExporter;

/// Output formats the tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// One xlsx workbook: a sheet of calendar days and one of strategies.
    Spreadsheet,
    /// Paginated plain-text strategy listing.
    Document,
    /// RFC 5545 all-day events.
    ICalendar,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Spreadsheet, Self::Document, Self::ICalendar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::Document => "document",
            Self::ICalendar => "ical",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something an exporter needs from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Workbook,
    TextLayout,
    ICalendar,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Workbook => "workbook",
            Self::TextLayout => "text-layout",
            Self::ICalendar => "icalendar",
        })
    }
}

/// Resolves capabilities on behalf of exporters.
pub trait CapabilityProvider {
    fn provides(&self, capability: Capability) -> bool;
}

/// Every capability this crate implements natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCapabilities;

impl CapabilityProvider for BuiltinCapabilities {
    fn provides(&self, _capability: Capability) -> bool {
        true
    }
}

/// Host-chosen settings that appear inside exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub prodid: String,
    pub uid_domain: String,
    pub timezone: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            prodid: "-//TWCalendar//2026 Holiday Calendar//ZH".to_string(),
            uid_domain: "twcalendar.local".to_string(),
            timezone: "Asia/Taipei".to_string(),
        }
    }
}

/// Read-only inputs for one export run.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    pub dataset: &'a Dataset,
    pub roc_year: i32,
    pub settings: &'a ExportSettings,
    /// Stamped into formats that record creation time.
    pub generated_at: DateTime<Utc>,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

pub trait Exporter {
    fn format(&self) -> ExportFormat;

    fn capability(&self) -> Capability;

    /// # Errors
    ///
    /// Format-specific encoding failures.
    fn render(&self, ctx: &ExportContext<'_>) -> Result<Vec<Artifact>, IoError>;
}

/// The built-in exporter for `format`.
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Spreadsheet => Box::new(SpreadsheetExporter),
        ExportFormat::Document => Box::new(DocumentExporter),
        ExportFormat::ICalendar => Box::new(ICalendarExporter),
    }
}

/// Resolves the exporter's capability, then renders.
///
/// # Errors
///
/// [`IoError::MissingCapability`] when `provider` cannot satisfy the
/// exporter, or whatever the exporter's render returns.
pub fn run_export(
    exporter: &dyn Exporter,
    provider: &dyn CapabilityProvider,
    ctx: &ExportContext<'_>,
) -> Result<Vec<Artifact>, IoError> {
    let format = exporter.format();
    let _span = info_span!("export", %format).entered();
    let capability = exporter.capability();
    if !provider.provides(capability) {
        return Err(IoError::MissingCapability {
            format: format.to_string(),
            capability: capability.to_string(),
        });
    }
    let artifacts = exporter.render(ctx)?;
    debug!(n_artifacts = artifacts.len(), "export rendered");
    Ok(artifacts)
}
