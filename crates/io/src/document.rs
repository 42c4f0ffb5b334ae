//! Simplified printable document listing every strategy.
//!
//! Pages are plain text separated by a form feed. The first page carries
//! the title block and fits fewer strategy lines than later pages.

use leavecal_calendar::{DateFormat, format_date};
use leavecal_model::Strategy;

use crate::error::IoError;
use crate::export::{Artifact, Capability, ExportContext, ExportFormat, Exporter};

pub const FIRST_PAGE_LINES: usize = 16;
pub const PAGE_LINES: usize = 21;
const PAGE_BREAK: &str = "\u{000C}\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExporter;

impl Exporter for DocumentExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Document
    }

    fn capability(&self) -> Capability {
        Capability::TextLayout
    }

    fn render(&self, ctx: &ExportContext<'_>) -> Result<Vec<Artifact>, IoError> {
        let pages = layout_pages(ctx.dataset.year, ctx.roc_year, &ctx.dataset.strategies);
        Ok(vec![Artifact {
            file_name: format!("{}年請假攻略行事曆.txt", ctx.dataset.year),
            media_type: "text/plain;charset=utf-8",
            bytes: pages.join(PAGE_BREAK).into_bytes(),
        }])
    }
}

pub fn strategy_line(s: &Strategy) -> String {
    format!(
        "{}: {} ~ {} (請{}天休{}天)",
        s.name,
        format_date(s.start_date, DateFormat::Iso),
        format_date(s.end_date, DateFormat::Iso),
        s.leave_count,
        s.total_days
    )
}

/// Splits the listing into pages, each ending with a newline.
pub fn layout_pages(year: i32, roc_year: i32, strategies: &[Strategy]) -> Vec<String> {
    let mut first = format!(
        "{year} 年度行事曆\n民國 {roc_year} 年請假攻略\n\n主要連假攻略:\n"
    );
    let (head, rest) = strategies.split_at(strategies.len().min(FIRST_PAGE_LINES));
    for s in head {
        first.push_str(&strategy_line(s));
        first.push('\n');
    }

    let mut pages = vec![first];
    for chunk in rest.chunks(PAGE_LINES) {
        let mut page = String::new();
        for s in chunk {
            page.push_str(&strategy_line(s));
            page.push('\n');
        }
        pages.push(page);
    }
    pages
}
