//! Integration test: load JSON + CSV fixtures from disk.

use std::path::Path;

use leavecal_io::{IoError, LoadConfig, load_dataset};

const HOLIDAYS: &str = r#"{
  "holidays": [
    { "date": "2026-01-01", "name": "開國紀念日" },
    { "date": "2026-10-10", "name": "國慶日" }
  ],
  "strategies": [
    {
      "id": 1, "name": "國慶連假", "startDate": "2026-10-09", "endDate": "2026-10-11",
      "leaveCount": 0, "totalDays": 3, "cpValue": 0
    },
    {
      "id": 2, "name": "🏆 國慶長假", "startDate": "2026-10-03", "endDate": "2026-10-11",
      "leaveCount": 3, "totalDays": 9, "cpValue": 3,
      "leaveDays": ["2026-10-07", "2026-10-08"], "description": "請 3 天休 9 天"
    }
  ]
}"#;

const CALENDAR: &str = "\u{feff}西元日期,星期,是否放假,備註\n\
20260101,四,2,開國紀念日\n\
20260102,五,0,\n\
20261010,六,2,國慶日\n";

fn write_fixture(dir: &Path, holidays: &str, calendar: &str) -> LoadConfig {
    let h = dir.join("holidays.json");
    let c = dir.join("calendar.csv");
    std::fs::write(&h, holidays).unwrap();
    std::fs::write(&c, calendar).unwrap();
    LoadConfig::default().with_holidays(h).with_calendar(c)
}

#[test]
fn loads_valid_fixture() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = write_fixture(dir.path(), HOLIDAYS, CALENDAR);
    let ds = load_dataset(&cfg).expect("load succeeds");

    assert_eq!(ds.year, 2026);
    assert_eq!(ds.holidays.len(), 2);
    assert_eq!(ds.strategies.len(), 2);
    assert_eq!(ds.calendar.len(), 3);
    assert!(ds.calendar[0].is_holiday);
    assert!(!ds.calendar[1].is_holiday);
    assert_eq!(ds.strategies[1].id, "2");
    assert_eq!(ds.leave_days().len(), 2);
}

#[test]
fn missing_json_is_file_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = LoadConfig::default()
        .with_holidays(dir.path().join("absent.json"))
        .with_calendar(dir.path().join("absent.csv"));
    assert!(matches!(
        load_dataset(&cfg),
        Err(IoError::FileNotFound { .. })
    ));
}

#[test]
fn wrong_year_fails_validation() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = write_fixture(dir.path(), HOLIDAYS, CALENDAR).with_year(2027);
    match load_dataset(&cfg) {
        Err(IoError::Validation { count, .. }) => assert!(count >= 5),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn total_below_leave_count_fails_validation() {
    let bad = HOLIDAYS.replace("\"totalDays\": 9", "\"totalDays\": 2");
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = write_fixture(dir.path(), &bad, CALENDAR);
    match load_dataset(&cfg) {
        Err(IoError::Validation { count, details }) => {
            assert_eq!(count, 1);
            assert!(details.contains("total days 2 < leave count 3"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
