use chrono::NaiveDate;
use leavecal_calendar::{
    DateFormat, date_range, days_between, format_date, is_weekend, next_day, parse_compact_date,
    parse_iso_date, weekday_label,
};

#[test]
fn full_year_has_expected_weekends() {
    let start = parse_iso_date("2026-01-01").unwrap();
    let end = parse_iso_date("2026-12-31").unwrap();
    let dates = date_range(start, end);
    assert_eq!(dates.len(), 365);
    assert_eq!(days_between(start, end), 365);

    // 2026 starts on a Thursday: 52 Saturdays and 52 Sundays.
    let weekends = dates.iter().filter(|d| is_weekend(**d)).count();
    assert_eq!(weekends, 104);
    assert_eq!(weekday_label(start), "四");
}

#[test]
fn compact_and_iso_parse_to_same_date() {
    let a = parse_compact_date("20261010").unwrap();
    let b = parse_iso_date("2026-10-10").unwrap();
    assert_eq!(a, b);
    assert_eq!(format_date(a, DateFormat::Compact), "20261010");
}

#[test]
fn exclusive_end_of_all_day_event() {
    let last = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
    assert_eq!(format_date(next_day(last), DateFormat::Compact), "20261007");
}

#[test]
fn leap_day_round_trips_in_leap_year_only() {
    assert!(parse_iso_date("2028-02-29").is_ok());
    assert!(parse_iso_date("2026-02-29").is_err());
}
