//! iCalendar (RFC 5545) export of holidays and suggested leave days.

use chrono::NaiveDate;
use leavecal_calendar::{DateFormat, format_date, next_day};

use crate::error::IoError;
use crate::export::{Artifact, Capability, ExportContext, ExportFormat, Exporter};

const CRLF: &str = "\r\n";
/// Maximum content-line length in octets, excluding the line break.
const MAX_LINE_OCTETS: usize = 75;
const LEAVE_SUMMARY: &str = "💡 建議請假日";

#[derive(Debug, Clone, Copy, Default)]
pub struct ICalendarExporter;

impl Exporter for ICalendarExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::ICalendar
    }

    fn capability(&self) -> Capability {
        Capability::ICalendar
    }

    fn render(&self, ctx: &ExportContext<'_>) -> Result<Vec<Artifact>, IoError> {
        Ok(vec![Artifact {
            file_name: format!("{}年行事曆.ics", ctx.dataset.year),
            media_type: "text/calendar;charset=utf-8",
            bytes: render_ical(ctx).into_bytes(),
        }])
    }
}

/// Escapes a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Folds a content line at 75 octets without splitting a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    for c in line.chars() {
        // Continuation lines start with one space, which counts.
        if used + c.len_utf8() > MAX_LINE_OCTETS {
            out.push_str(CRLF);
            out.push(' ');
            used = 1;
        }
        out.push(c);
        used += c.len_utf8();
    }
    out
}

struct Calendar {
    lines: Vec<String>,
}

impl Calendar {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn all_day_event(
        &mut self,
        uid: &str,
        stamp: &str,
        date: NaiveDate,
        summary: &str,
        description: &str,
    ) {
        self.push("BEGIN:VEVENT");
        self.push(format!("UID:{uid}"));
        self.push(format!("DTSTAMP:{stamp}"));
        self.push(format!(
            "DTSTART;VALUE=DATE:{}",
            format_date(date, DateFormat::Compact)
        ));
        // All-day events end on the following day, exclusive.
        self.push(format!(
            "DTEND;VALUE=DATE:{}",
            format_date(next_day(date), DateFormat::Compact)
        ));
        self.push(format!("SUMMARY:{}", escape_text(summary)));
        self.push(format!("DESCRIPTION:{}", escape_text(description)));
        self.push("TRANSP:TRANSPARENT");
        self.push("END:VEVENT");
    }

    fn finish(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&fold_line(&line));
            out.push_str(CRLF);
        }
        out
    }
}

/// Renders the whole `VCALENDAR` document.
pub fn render_ical(ctx: &ExportContext<'_>) -> String {
    let ds = ctx.dataset;
    let settings = ctx.settings;
    let stamp = ctx.generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    let mut cal = Calendar { lines: Vec::new() };
    cal.push("BEGIN:VCALENDAR");
    cal.push("VERSION:2.0");
    cal.push(format!("PRODID:{}", settings.prodid));
    cal.push("CALSCALE:GREGORIAN");
    cal.push("METHOD:PUBLISH");
    cal.push(format!(
        "X-WR-CALNAME:{}",
        escape_text(&format!("{}年行事曆", ds.year))
    ));
    cal.push(format!("X-WR-TIMEZONE:{}", settings.timezone));

    for holiday in &ds.holidays {
        let day = format_date(holiday.date, DateFormat::Compact);
        cal.all_day_event(
            &format!("{day}@{}", settings.uid_domain),
            &stamp,
            holiday.date,
            &holiday.name,
            &format!("{} - 國定假日", holiday.name),
        );
    }

    for strategy in &ds.strategies {
        for leave_day in &strategy.leave_days {
            let day = format_date(*leave_day, DateFormat::Compact);
            cal.all_day_event(
                &format!("leave-{day}-{}@{}", strategy.id, settings.uid_domain),
                &stamp,
                *leave_day,
                LEAVE_SUMMARY,
                &format!("{} - {}", strategy.name, strategy.description),
            );
        }
    }

    cal.push("END:VCALENDAR");
    cal.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn short_lines_are_not_folded() {
        assert_eq!(fold_line("SUMMARY:國慶日"), "SUMMARY:國慶日");
    }

    #[test]
    fn long_lines_fold_on_char_boundaries() {
        let line = format!("DESCRIPTION:{}", "請假".repeat(40));
        let folded = fold_line(&line);
        for (i, part) in folded.split(CRLF).enumerate() {
            assert!(part.len() <= MAX_LINE_OCTETS, "part {i} too long");
            if i > 0 {
                assert!(part.starts_with(' '));
            }
        }
        let unfolded: String = folded.split("\r\n ").collect();
        assert_eq!(unfolded, line);
    }
}
