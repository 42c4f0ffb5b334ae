//! Month and year grid assembly.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use leavecal_calendar::{CalendarError, date_range};
use tracing::debug;

use crate::classify::{DayTag, GridContext};
use crate::month::MonthIndex;

/// One filled cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub tag: DayTag,
    pub label: Option<String>,
}

/// One month laid out Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: MonthIndex,
    /// Empty cells before the 1st (its weekday, Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<GridDay>,
}

impl MonthGrid {
    pub fn day(&self, date: NaiveDate) -> Option<&GridDay> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Twelve month grids for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

fn month_bounds(year: i32, month: MonthIndex) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let invalid = || CalendarError::InvalidDate {
        input: format!("{year}-{:02}", month.month1()),
        expected: "a representable year",
    };
    let first = NaiveDate::from_ymd_opt(year, month.month1(), 1).ok_or_else(invalid)?;
    let next_first = if month == MonthIndex::DECEMBER {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.month1() + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;
    Ok((first, last))
}

/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `year` is outside chrono's
/// representable range.
pub fn build_month(
    ctx: &GridContext<'_>,
    year: i32,
    month: MonthIndex,
) -> Result<MonthGrid, CalendarError> {
    let (first, last) = month_bounds(year, month)?;
    let days = date_range(first, last)
        .into_iter()
        .map(|date| {
            let tag = ctx.classify(date);
            GridDay {
                date,
                tag,
                label: ctx.label(date, tag),
            }
        })
        .collect();
    Ok(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// # Errors
///
/// See [`build_month`].
pub fn build_year(ctx: &GridContext<'_>, year: i32) -> Result<YearGrid, CalendarError> {
    let months = MonthIndex::all()
        .map(|m| build_month(ctx, year, m))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(year, "built year grid");
    Ok(YearGrid { year, months })
}

/// Tag for every date of one month, or of the whole year when `month` is
/// `None`.
///
/// # Errors
///
/// See [`build_month`].
pub fn day_mapping(
    ctx: &GridContext<'_>,
    year: i32,
    month: Option<MonthIndex>,
) -> Result<BTreeMap<NaiveDate, DayTag>, CalendarError> {
    let months: Vec<MonthIndex> = match month {
        Some(m) => vec![m],
        None => MonthIndex::all().collect(),
    };
    let mut mapping = BTreeMap::new();
    for m in months {
        let (first, last) = month_bounds(year, m)?;
        for date in date_range(first, last) {
            mapping.insert(date, ctx.classify(date));
        }
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal_model::Dataset;

    #[test]
    fn february_2026_layout() {
        let ds = Dataset::default();
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let ctx = GridContext::new(&ds, today);
        let grid = build_month(&ctx, 2026, MonthIndex::from_month1(2)).unwrap();
        assert_eq!(grid.days.len(), 28);
        // 2026-02-01 is a Sunday.
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.day(today).unwrap().tag, DayTag::Today);
    }

    #[test]
    fn december_ends_on_31st() {
        let ds = Dataset::default();
        let ctx = GridContext::new(&ds, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let grid = build_month(&ctx, 2026, MonthIndex::DECEMBER).unwrap();
        assert_eq!(grid.days.len(), 31);
        // 2026-12-01 is a Tuesday.
        assert_eq!(grid.leading_blanks, 2);
    }

    #[test]
    fn year_mapping_covers_every_date() {
        let ds = Dataset::default();
        let ctx = GridContext::new(&ds, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(day_mapping(&ctx, 2026, None).unwrap().len(), 365);
        assert_eq!(
            day_mapping(&ctx, 2026, Some(MonthIndex::JANUARY)).unwrap().len(),
            31
        );
        let year = build_year(&ctx, 2026).unwrap();
        assert_eq!(year.months.len(), 12);
    }
}
