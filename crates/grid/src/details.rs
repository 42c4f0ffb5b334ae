use chrono::NaiveDate;
use leavecal_calendar::{DateFormat, format_date, weekday_label};
use leavecal_model::{Dataset, Strategy};
use leavecal_strategy::strategy_for_date;

/// What the view shows when a single date is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetails<'a> {
    pub date: NaiveDate,
    /// e.g. `2026年10月10日 (六)`
    pub heading: String,
    pub note: Option<String>,
    pub is_leave_day: bool,
    pub related: Option<&'a Strategy>,
}

pub fn day_details(dataset: &Dataset, date: NaiveDate) -> DayDetails<'_> {
    let note = dataset
        .calendar_day(date)
        .and_then(|d| d.note())
        .map(str::to_string)
        .or_else(|| dataset.holiday_on(date).map(|h| h.name.clone()));
    DayDetails {
        date,
        heading: format!(
            "{} ({})",
            format_date(date, DateFormat::FullZh),
            weekday_label(date)
        ),
        note,
        is_leave_day: dataset.strategies.iter().any(|s| s.leave_days.contains(&date)),
        related: strategy_for_date(&dataset.strategies, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal_model::{Holiday, HolidayData};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    #[test]
    fn details_for_leave_day_inside_plan() {
        let mut plan = Strategy::basic("p", "國慶連假", d(10, 3), d(10, 11));
        plan.leave_count = 1;
        plan.leave_days = vec![d(10, 8)];
        let data = HolidayData {
            holidays: vec![Holiday::new(d(10, 10), "國慶日")],
            strategies: vec![plan],
        };
        let ds = Dataset::new(2026, data, vec![]);

        let details = day_details(&ds, d(10, 8));
        assert_eq!(details.heading, "2026年10月8日 (四)");
        assert!(details.is_leave_day);
        assert_eq!(details.related.map(|s| s.id.as_str()), Some("p"));
        assert!(details.note.is_none());

        let holiday = day_details(&ds, d(10, 10));
        assert_eq!(holiday.note.as_deref(), Some("國慶日"));
        assert!(!holiday.is_leave_day);
    }
}
