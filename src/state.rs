//! Loaded configuration and dataset shared by every command.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use tracing::{debug, error, info, info_span};

use leavecal_calendar::today_local;
use leavecal_io::load_dataset;
use leavecal_model::Dataset;

use crate::config::LeavecalConfig;
use crate::convert;

pub struct AppState {
    pub config: LeavecalConfig,
    pub dataset: Dataset,
    /// `--today` minus the local date at startup; zero without an override.
    day_offset: TimeDelta,
}

impl AppState {
    /// Loads the dataset `config` points at. `today` overrides the local date.
    pub fn load(config: LeavecalConfig, today: Option<NaiveDate>) -> Result<Self> {
        let dataset = load_dataset_for(&config)?;
        Ok(Self::new(config, dataset, today, today_local()))
    }

    fn new(
        config: LeavecalConfig,
        dataset: Dataset,
        today: Option<NaiveDate>,
        local_today: NaiveDate,
    ) -> Self {
        let day_offset = today.map_or(TimeDelta::zero(), |d| d - local_today);
        if !day_offset.is_zero() {
            debug!(days = day_offset.num_days(), "today overridden");
        }
        Self {
            config,
            dataset,
            day_offset,
        }
    }

    /// Local wall-clock time, shifted by whole days when `--today` was given.
    ///
    /// The clock keeps running across midnight either way.
    pub fn now(&self) -> NaiveDateTime {
        self.shifted(Local::now().naive_local())
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn shifted(&self, wall: NaiveDateTime) -> NaiveDateTime {
        wall.checked_add_signed(self.day_offset).unwrap_or(wall)
    }
}

/// Reads the holiday dataset for `config`.
///
/// Failure is fatal for every view; the error carries a hint to re-run.
pub fn load_dataset_for(config: &LeavecalConfig) -> Result<Dataset> {
    let load = convert::build_load_config(config)?;
    let _span = info_span!("load", year = load.year()).entered();
    match load_dataset(&load) {
        Ok(dataset) => {
            info!(
                n_holidays = dataset.holidays.len(),
                n_strategies = dataset.strategies.len(),
                n_days = dataset.calendar.len(),
                "dataset loaded"
            );
            Ok(dataset)
        }
        Err(e) => {
            error!(error = %e, "failed to load holiday data");
            Err(e).with_context(|| {
                format!(
                    "無法載入假期資料 ({} / {}); please check the files and run the command again",
                    load.holidays().display(),
                    load.calendar().display()
                )
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal_countdown::{Countdown, CountdownState};
    use leavecal_model::{HolidayData, Strategy};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32, sec: u32) -> NaiveDateTime {
        date.and_hms_opt(h, min, sec).unwrap()
    }

    fn state(today: Option<NaiveDate>, local_today: NaiveDate) -> AppState {
        let data = HolidayData {
            holidays: Vec::new(),
            strategies: vec![Strategy::basic("0", "中秋連假", d(10, 3), d(10, 6))],
        };
        let dataset = Dataset::new(2026, data, Vec::new());
        AppState::new(LeavecalConfig::default(), dataset, today, local_today)
    }

    #[test]
    fn without_override_the_wall_clock_is_used() {
        let s = state(None, d(10, 14));
        let wall = at(d(10, 14), 8, 30, 0);
        assert_eq!(s.shifted(wall), wall);
    }

    #[test]
    fn override_keeps_time_of_day() {
        let s = state(Some(d(9, 10)), d(10, 14));
        assert_eq!(s.shifted(at(d(10, 14), 8, 30, 0)), at(d(9, 10), 8, 30, 0));
    }

    #[test]
    fn overridden_date_advances_past_midnight() {
        let s = state(Some(d(10, 2)), d(10, 14));
        let before = s.shifted(at(d(10, 14), 23, 59, 59));
        let after = s.shifted(at(d(10, 15), 0, 0, 1));
        assert_eq!(before, at(d(10, 2), 23, 59, 59));
        assert_eq!(after, at(d(10, 3), 0, 0, 1));
    }

    #[test]
    fn watch_session_turns_in_progress_at_block_start() {
        let s = state(Some(d(10, 2)), d(10, 14));
        let start = s.shifted(at(d(10, 14), 23, 59, 58));
        let mut countdown = Countdown::new(&s.dataset.strategies, start);

        let first = countdown.tick(start);
        assert!(matches!(first, CountdownState::Upcoming { .. }));
        assert_eq!(first.remaining().unwrap().total_seconds(), 2);

        let next = countdown.tick(s.shifted(at(d(10, 15), 0, 0, 1)));
        assert!(matches!(next, CountdownState::InProgress { .. }));
        assert_eq!(next.selection().unwrap().target.id, "0");
    }
}
