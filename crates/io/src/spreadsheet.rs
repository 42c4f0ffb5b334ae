//! Spreadsheet export: one workbook with a sheet of calendar days and a
//! sheet of strategies.

use leavecal_calendar::{DateFormat, format_date};
use leavecal_model::Dataset;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

use crate::error::IoError;
use crate::export::{Artifact, Capability, ExportContext, ExportFormat, Exporter};

pub const STRATEGY_SHEET: &str = "請假攻略";

const XLSX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// One cell value. Counts and CP values stay numeric in the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    fn number(v: f64) -> Self {
        if v.is_finite() {
            Self::Number(v)
        } else {
            Self::Text(v.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetExporter;

impl Exporter for SpreadsheetExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Spreadsheet
    }

    fn capability(&self) -> Capability {
        Capability::Workbook
    }

    fn render(&self, ctx: &ExportContext<'_>) -> Result<Vec<Artifact>, IoError> {
        let ds = ctx.dataset;
        let mut workbook = Workbook::new();
        write_sheet(
            workbook.add_worksheet(),
            &calendar_sheet_name(ds.year),
            &calendar_rows(ds),
        )?;
        write_sheet(workbook.add_worksheet(), STRATEGY_SHEET, &strategy_rows(ds))?;
        let bytes = workbook.save_to_buffer()?;
        debug!(n_bytes = bytes.len(), "workbook encoded");
        Ok(vec![Artifact {
            file_name: format!("{}年請假攻略行事曆.xlsx", ds.year),
            media_type: XLSX_MEDIA_TYPE,
            bytes,
        }])
    }
}

pub fn calendar_sheet_name(year: i32) -> String {
    format!("{year}年度行事曆")
}

/// Header row is bold; everything else is written as-is.
fn write_sheet(sheet: &mut Worksheet, name: &str, rows: &[Vec<Cell>]) -> Result<(), IoError> {
    sheet.set_name(name)?;
    let bold = Format::new().set_bold();
    for (r, row) in (0u32..).zip(rows) {
        for (c, cell) in (0u16..).zip(row) {
            match (cell, r) {
                (Cell::Text(s), 0) => sheet.write_string_with_format(r, c, s, &bold)?,
                (Cell::Text(s), _) => sheet.write_string(r, c, s)?,
                (Cell::Number(v), _) => sheet.write_number(r, c, *v)?,
            };
        }
    }
    Ok(())
}

/// 日期, 星期, 類型, 備註 with one row per calendar day.
pub fn calendar_rows(ds: &Dataset) -> Vec<Vec<Cell>> {
    let mut rows = vec![
        ["日期", "星期", "類型", "備註"]
            .into_iter()
            .map(Cell::text)
            .collect(),
    ];
    rows.extend(ds.calendar.iter().map(|day| {
        let kind = if day.is_holiday { "假日" } else { "工作日" };
        vec![
            Cell::text(format_date(day.date, DateFormat::Iso)),
            Cell::text(day.day_of_week.as_str()),
            Cell::text(kind),
            Cell::text(day.note.as_str()),
        ]
    }));
    rows
}

/// One row per strategy in source order.
pub fn strategy_rows(ds: &Dataset) -> Vec<Vec<Cell>> {
    let header = [
        "攻略名稱",
        "開始日期",
        "結束日期",
        "請假天數",
        "總休假天數",
        "CP值",
        "建議請假日",
        "說明",
        "備註",
    ];
    let mut rows = vec![header.into_iter().map(Cell::text).collect()];
    rows.extend(ds.strategies.iter().map(|s| {
        let leave_days = s
            .leave_days
            .iter()
            .map(|d| format_date(*d, DateFormat::Iso))
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            Cell::text(s.name.as_str()),
            Cell::text(format_date(s.start_date, DateFormat::Iso)),
            Cell::text(format_date(s.end_date, DateFormat::Iso)),
            Cell::number(f64::from(s.leave_count)),
            Cell::number(f64::from(s.total_days)),
            Cell::number(s.cp_value),
            Cell::text(leave_days),
            Cell::text(s.description.as_str()),
            Cell::text(if s.labor_only { "僅勞工適用" } else { "" }),
        ]
    }));
    rows
}
