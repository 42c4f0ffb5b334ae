//! Calendar navigation state.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::month::MonthIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Month,
    Year,
}

/// Which part of the single configured year is on screen.
///
/// The year never changes: month navigation clamps at January and
/// December, and in year view prev/next do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    year: i32,
    month: MonthIndex,
    mode: ViewMode,
    show_leave_days: bool,
}

impl CalendarView {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            month: MonthIndex::JANUARY,
            mode: ViewMode::default(),
            show_leave_days: false,
        }
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn show_leave_days(&self) -> bool {
        self.show_leave_days
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn set_show_leave_days(&mut self, show: bool) {
        self.show_leave_days = show;
    }

    /// Requests month `month` (zero-based); out-of-range values clamp.
    pub fn set_month(&mut self, month: i32) {
        self.month = MonthIndex::clamped(month);
        debug!(requested = month, month = self.month.get(), "month selected");
    }

    pub fn prev(&mut self) {
        if self.mode == ViewMode::Month {
            self.set_month(self.month.get() as i32 - 1);
        }
    }

    pub fn next(&mut self) {
        if self.mode == ViewMode::Month {
            self.set_month(self.month.get() as i32 + 1);
        }
    }

    /// Today's month if today is in the configured year, otherwise January.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.month = if today.year() == self.year {
            MonthIndex::from_month1(today.month())
        } else {
            MonthIndex::JANUARY
        };
    }

    /// Shows the month of `date` in month view. The year stays fixed.
    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.month = MonthIndex::from_month1(date.month());
        self.mode = ViewMode::Month;
    }

    /// Selecting a thumbnail in year view opens that month.
    pub fn open_month(&mut self, month: MonthIndex) {
        self.month = month;
        self.mode = ViewMode::Month;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn clamps_at_both_ends() {
        let mut view = CalendarView::new(2026);
        view.set_month(-1);
        assert_eq!(view.month(), MonthIndex::JANUARY);
        view.set_month(12);
        assert_eq!(view.month(), MonthIndex::DECEMBER);
        assert_eq!(view.year(), 2026);
    }

    #[test]
    fn prev_next_stop_at_boundaries() {
        let mut view = CalendarView::new(2026);
        view.prev();
        assert_eq!(view.month(), MonthIndex::JANUARY);
        for _ in 0..20 {
            view.next();
        }
        assert_eq!(view.month(), MonthIndex::DECEMBER);
        assert_eq!(view.year(), 2026);
    }

    #[test]
    fn year_view_ignores_navigation() {
        let mut view = CalendarView::new(2026).with_mode(ViewMode::Year);
        view.set_month(5);
        view.next();
        view.prev();
        assert_eq!(view.month().get(), 5);
    }

    #[test]
    fn go_to_today_outside_year_resets_to_january() {
        let mut view = CalendarView::new(2026);
        view.go_to_today(d(2026, 10, 14));
        assert_eq!(view.month().month1(), 10);
        view.go_to_today(d(2027, 3, 1));
        assert_eq!(view.month(), MonthIndex::JANUARY);
    }

    #[test]
    fn go_to_date_switches_to_month_view() {
        let mut view = CalendarView::new(2026).with_mode(ViewMode::Year);
        view.go_to_date(d(2026, 4, 3));
        assert_eq!(view.mode(), ViewMode::Month);
        assert_eq!(view.month().month1(), 4);
    }
}
