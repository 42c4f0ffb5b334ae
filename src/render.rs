//! Terminal presentation of the core view models.
//!
//! Everything here returns a `String`; commands decide where it goes.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use leavecal_calendar::{DateFormat, format_date, weekday_label};
use leavecal_countdown::{CountdownState, Remaining, Selection};
use leavecal_grid::{DayDetails, DayTag, MonthGrid, YearGrid};
use leavecal_model::Strategy;
use leavecal_strategy::cp_stars;

const WEEKDAY_HEADER: &str = "日 一 二 三 四 五 六";

fn marker(tag: DayTag) -> char {
    match tag {
        DayTag::SuggestedLeave => '+',
        DayTag::Today => '<',
        DayTag::Holiday | DayTag::Weekend => '*',
        DayTag::Normal => ' ',
    }
}

/// `10月3日(六)`
fn short_date(date: NaiveDate) -> String {
    format!(
        "{}({})",
        format_date(date, DateFormat::MonthDayZh),
        weekday_label(date)
    )
}

/// Seven-column rows of day cells, each cell three columns wide.
fn grid_rows(month: &MonthGrid) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = "   ".repeat(month.leading_blanks as usize);
    let mut col = month.leading_blanks;
    for day in &month.days {
        let _ = write!(row, "{:>2}{}", day.date.day(), marker(day.tag));
        col += 1;
        if col == 7 {
            rows.push(row.trim_end().to_string());
            row.clear();
            col = 0;
        }
    }
    if col > 0 {
        rows.push(row.trim_end().to_string());
    }
    rows
}

pub fn month_view(month: &MonthGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} 年 {} 月", month.year, month.month.month1());
    let _ = writeln!(out, "{WEEKDAY_HEADER}");
    for row in grid_rows(month) {
        let _ = writeln!(out, "{row}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "* 放假  + 建議請假  < 今天");
    for (day, label) in month
        .days
        .iter()
        .filter_map(|d| d.label.as_ref().map(|l| (d.date.day(), l)))
    {
        let _ = writeln!(out, "{day:>2}日 {label}");
    }
    out
}

pub fn year_view(year: &YearGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} 年", year.year);
    for month in &year.months {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} 月", month.month.month1());
        let _ = writeln!(out, "{WEEKDAY_HEADER}");
        for row in grid_rows(month) {
            let _ = writeln!(out, "{row}");
        }
    }
    out
}

fn clock(r: Remaining) -> String {
    format!(
        "{} 天 {:02}:{:02}:{:02}",
        r.days(),
        r.hours(),
        r.minutes(),
        r.seconds()
    )
}

fn block_lines(out: &mut String, selection: &Selection<'_>) {
    let target = selection.target;
    let _ = writeln!(
        out,
        "{} ~ {}  共 {} 天",
        short_date(target.start_date),
        short_date(target.end_date),
        target.total_days
    );
    if let Some(related) = selection.related {
        let _ = writeln!(
            out,
            "💡 請假攻略：請 {} 天休 {} 天 ({})",
            related.leave_count,
            related.total_days,
            related.display_name()
        );
    }
}

pub fn countdown_view(state: &CountdownState<'_>, year: i32) -> String {
    let mut out = String::new();
    match state {
        CountdownState::NoMoreHolidays => {
            let _ = writeln!(out, "{year} 年假期已結束");
            let _ = writeln!(out, "期待明年的假期！");
        }
        CountdownState::Upcoming {
            selection,
            remaining,
        } => {
            let _ = writeln!(out, "距離 {} 還有", selection.target.display_name());
            let _ = writeln!(out, "{}", clock(*remaining));
            block_lines(&mut out, selection);
        }
        CountdownState::InProgress {
            selection,
            remaining,
        } => {
            let _ = writeln!(out, "🎉 {} 進行中！", selection.target.display_name());
            let _ = writeln!(
                out,
                "還有 {} 天 {} 小時可以放",
                remaining.days(),
                remaining.hours()
            );
            block_lines(&mut out, selection);
        }
    }
    out
}

pub fn strategy_row(rank: usize, s: &Strategy) -> String {
    let mut line = format!(
        "{rank:>2}. {}  {} ~ {}  請 {} 休 {}  CP {:.1} {}",
        s.display_name(),
        format_date(s.start_date, DateFormat::MonthDay),
        format_date(s.end_date, DateFormat::MonthDay),
        s.leave_count,
        s.total_days,
        s.cp_value,
        cp_stars(s.cp_value)
    );
    if s.labor_only {
        line.push_str("  (僅勞工適用)");
    }
    line.trim_end().to_string()
}

pub fn strategies_view(strategies: &[&Strategy]) -> String {
    if strategies.is_empty() {
        return "沒有符合條件的請假攻略\n".to_string();
    }
    let mut out = String::new();
    for (i, s) in strategies.iter().enumerate() {
        let _ = writeln!(out, "{}", strategy_row(i + 1, s));
        if !s.leave_days.is_empty() {
            let days: Vec<String> = s
                .leave_days
                .iter()
                .map(|d| format_date(*d, DateFormat::MonthDay))
                .collect();
            let _ = writeln!(out, "    建議請假日: {}", days.join(", "));
        }
    }
    out
}

pub fn day_view(details: &DayDetails<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", details.heading);
    if let Some(note) = &details.note {
        let _ = writeln!(out, "{note}");
    }
    if details.is_leave_day {
        let _ = writeln!(out, "建議請假日");
    }
    if let Some(s) = details.related {
        let _ = writeln!(
            out,
            "{}: {} ~ {} (請{}天休{}天)",
            s.display_name(),
            format_date(s.start_date, DateFormat::Slashed),
            format_date(s.end_date, DateFormat::Slashed),
            s.leave_count,
            s.total_days
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal_grid::{GridContext, MonthIndex, build_month, day_details};
    use leavecal_model::{CalendarDay, Dataset, Holiday, HolidayData};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn dataset() -> Dataset {
        let national = Strategy::basic("0", "🏆 國慶日連假", d(10, 10), d(10, 11));
        let mut plan = Strategy::basic("1", "國慶請假", d(10, 3), d(10, 11));
        plan.leave_count = 4;
        plan.total_days = 9;
        plan.cp_value = 2.5;
        plan.leave_days = vec![d(10, 5), d(10, 6), d(10, 7), d(10, 8)];
        let data = HolidayData {
            holidays: vec![Holiday::new(d(10, 10), "國慶日")],
            strategies: vec![national, plan],
        };
        let calendar = vec![CalendarDay {
            date: d(10, 9),
            day_of_week: "五".to_string(),
            is_holiday: true,
            note: "補假".to_string(),
        }];
        Dataset::new(2026, data, calendar)
    }

    #[test]
    fn october_grid_starts_on_thursday() {
        let ds = dataset();
        let ctx = GridContext::new(&ds, d(1, 1)).with_show_leave_days(true);
        let grid = build_month(&ctx, 2026, MonthIndex::from_month1(10)).unwrap();
        let rows = grid_rows(&grid);
        assert_eq!(rows[0], format!("{} 1  2  3*", "   ".repeat(4)));
        assert_eq!(rows[1], " 4* 5+ 6+ 7+ 8+ 9*10*");
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn month_view_lists_labels() {
        let ds = dataset();
        let ctx = GridContext::new(&ds, d(1, 1)).with_show_leave_days(true);
        let grid = build_month(&ctx, 2026, MonthIndex::from_month1(10)).unwrap();
        let out = month_view(&grid);
        assert!(out.starts_with("2026 年 10 月\n"));
        assert!(out.contains(" 9日 補假"));
        assert!(out.contains("10日 國慶日"));
        assert!(out.contains(" 5日 請假"));
    }

    #[test]
    fn month_view_lists_each_label_once() {
        let ds = dataset();
        let ctx = GridContext::new(&ds, d(1, 1));
        let grid = build_month(&ctx, 2026, MonthIndex::from_month1(10)).unwrap();
        let out = month_view(&grid);
        let legend = out.split("< 今天\n").nth(1).unwrap();
        assert_eq!(legend, " 9日 補假\n10日 國慶日\n");
    }

    #[test]
    fn countdown_upcoming_shows_clock_and_plan() {
        let ds = dataset();
        let selection = Selection {
            target: &ds.strategies[0],
            related: Some(&ds.strategies[1]),
        };
        let state = CountdownState::Upcoming {
            selection,
            remaining: Remaining::from_seconds(2 * 86_400 + 3 * 3600 + 4 * 60 + 5),
        };
        let out = countdown_view(&state, 2026);
        assert!(out.starts_with("距離 國慶日連假 還有\n2 天 03:04:05\n"));
        assert!(out.contains("10月10日(六) ~ 10月11日(日)"));
        assert!(out.contains("💡 請假攻略：請 4 天休 9 天"));
    }

    #[test]
    fn countdown_finished_year() {
        let out = countdown_view(&CountdownState::NoMoreHolidays, 2026);
        assert_eq!(out, "2026 年假期已結束\n期待明年的假期！\n");
    }

    #[test]
    fn in_progress_shows_days_and_hours() {
        let ds = dataset();
        let state = CountdownState::InProgress {
            selection: Selection {
                target: &ds.strategies[0],
                related: None,
            },
            remaining: Remaining::from_seconds(86_400 + 5 * 3600 + 59),
        };
        let out = countdown_view(&state, 2026);
        assert!(out.starts_with("🎉 國慶日連假 進行中！\n還有 1 天 5 小時可以放\n"));
        assert!(!out.contains("💡"));
    }

    #[test]
    fn strategy_row_has_stars() {
        let ds = dataset();
        let row = strategy_row(1, &ds.strategies[1]);
        assert_eq!(row, " 1. 國慶請假  10/03 ~ 10/11  請 4 休 9  CP 2.5 ⭐⭐⭐");
    }

    #[test]
    fn empty_strategy_list() {
        assert_eq!(strategies_view(&[]), "沒有符合條件的請假攻略\n");
    }

    #[test]
    fn day_view_for_leave_day() {
        let ds = dataset();
        let out = day_view(&day_details(&ds, d(10, 5)));
        assert!(out.starts_with("2026年10月5日 (一)\n"));
        assert!(out.contains("建議請假日\n"));
        assert!(out.contains("國慶請假: 2026/10/03 ~ 2026/10/11 (請4天休9天)"));
    }
}
