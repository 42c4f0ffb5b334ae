//! Display formats for calendar dates.

use chrono::{Datelike, NaiveDate};

/// Offset between the Gregorian year and the Republic of China (Minguo) year.
const ROC_OFFSET: i32 = 1911;

/// Supported display layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `2026-10-06`
    #[default]
    Iso,
    /// `2026/10/06`
    Slashed,
    /// `10/06`
    MonthDay,
    /// `10月6日`
    MonthDayZh,
    /// `2026年10月6日`
    FullZh,
    /// `115年10月06日`
    Roc,
    /// `20261006`
    Compact,
}

/// Formats `date` in the requested layout.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match format {
        DateFormat::Iso => format!("{y:04}-{m:02}-{d:02}"),
        DateFormat::Slashed => format!("{y:04}/{m:02}/{d:02}"),
        DateFormat::MonthDay => format!("{m:02}/{d:02}"),
        DateFormat::MonthDayZh => format!("{m}月{d}日"),
        DateFormat::FullZh => format!("{y}年{m}月{d}日"),
        DateFormat::Roc => format!("{}年{m:02}月{d:02}日", y - ROC_OFFSET),
        DateFormat::Compact => format!("{y:04}{m:02}{d:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }

    #[test]
    fn all_formats() {
        let cases = [
            (DateFormat::Iso, "2026-03-05"),
            (DateFormat::Slashed, "2026/03/05"),
            (DateFormat::MonthDay, "03/05"),
            (DateFormat::MonthDayZh, "3月5日"),
            (DateFormat::FullZh, "2026年3月5日"),
            (DateFormat::Roc, "115年03月05日"),
            (DateFormat::Compact, "20260305"),
        ];
        for (fmt, expected) in cases {
            assert_eq!(format_date(date(), fmt), expected, "{fmt:?}");
        }
    }

    #[test]
    fn default_is_iso() {
        assert_eq!(DateFormat::default(), DateFormat::Iso);
    }
}
