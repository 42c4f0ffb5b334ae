//! Countdown that keeps its target across ticks.

use chrono::NaiveDateTime;
use leavecal_model::Strategy;
use tracing::{debug, info};

use crate::select::{Selection, select};
use crate::state::{CountdownState, block_end, state_at};

/// A running countdown over one strategy list.
///
/// The target chosen at construction stays fixed while it is upcoming or in
/// progress, so passing its start time turns `Upcoming` into `InProgress`
/// on the next tick. Once the target has ended the session selects again.
#[derive(Debug, Clone)]
pub struct Countdown<'a> {
    strategies: &'a [Strategy],
    selection: Option<Selection<'a>>,
}

impl<'a> Countdown<'a> {
    pub fn new(strategies: &'a [Strategy], now: NaiveDateTime) -> Self {
        let selection = select(strategies, now.date());
        if let Some(sel) = &selection {
            info!(
                target_id = %sel.target.id,
                related = sel.related.map(|r| r.id.as_str()).unwrap_or("-"),
                "countdown target selected"
            );
        }
        Self {
            strategies,
            selection,
        }
    }

    pub fn selection(&self) -> Option<&Selection<'a>> {
        self.selection.as_ref()
    }

    /// State at `now`, re-selecting first if the current target is over.
    pub fn tick(&mut self, now: NaiveDateTime) -> CountdownState<'a> {
        if let Some(sel) = &self.selection
            && now > block_end(sel)
        {
            debug!(ended = %sel.target.id, "countdown target ended, re-selecting");
            self.selection = select(self.strategies, now.date());
        }
        state_at(self.selection, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    fn at(m: u32, day: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        d(m, day).and_hms_opt(h, min, s).unwrap()
    }

    fn blocks() -> Vec<Strategy> {
        vec![
            Strategy::basic("oct", "中秋連假", d(10, 3), d(10, 6)),
            Strategy::basic("natl", "國慶日連假", d(10, 9), d(10, 11)),
        ]
    }

    #[test]
    fn upcoming_turns_in_progress_at_midnight() {
        let list = blocks();
        let mut cd = Countdown::new(&list, at(10, 2, 23, 59, 58));
        assert!(matches!(
            cd.tick(at(10, 2, 23, 59, 59)),
            CountdownState::Upcoming { .. }
        ));
        match cd.tick(at(10, 3, 0, 0, 0)) {
            CountdownState::InProgress { selection, .. } => assert_eq!(selection.target.id, "oct"),
            other => panic!("expected in progress, got {other:?}"),
        }
    }

    #[test]
    fn reselects_after_target_ends() {
        let list = blocks();
        let mut cd = Countdown::new(&list, at(10, 6, 12, 0, 0));
        // Fresh selection on 10/06 prefers the next upcoming block.
        assert_eq!(cd.selection().unwrap().target.id, "natl");

        let mut cd = Countdown::new(&list, at(10, 2, 12, 0, 0));
        assert_eq!(cd.selection().unwrap().target.id, "oct");
        match cd.tick(at(10, 7, 0, 0, 0)) {
            CountdownState::Upcoming { selection, .. } => assert_eq!(selection.target.id, "natl"),
            other => panic!("expected upcoming, got {other:?}"),
        }
    }

    #[test]
    fn ends_with_no_more_holidays() {
        let list = blocks();
        let mut cd = Countdown::new(&list, at(10, 10, 8, 0, 0));
        assert!(matches!(
            cd.tick(at(10, 10, 8, 0, 1)),
            CountdownState::InProgress { .. }
        ));
        assert_eq!(cd.tick(at(10, 12, 0, 0, 0)), CountdownState::NoMoreHolidays);
    }
}
