//! Target selection over basic holiday blocks.

use chrono::NaiveDate;
use leavecal_model::Strategy;

/// Strategies split by whether they need leave, each in source order.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    /// `leave_count == 0`
    pub basic: Vec<&'a Strategy>,
    /// `leave_count > 0`
    pub leave: Vec<&'a Strategy>,
}

pub fn partition(strategies: &[Strategy]) -> Partition<'_> {
    let (basic, leave): (Vec<&Strategy>, Vec<&Strategy>) =
        strategies.iter().partition(|s| s.is_basic());
    Partition { basic, leave }
}

/// The holiday block being counted down to, and the leave plan that
/// extends it, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub target: &'a Strategy,
    pub related: Option<&'a Strategy>,
}

/// Earliest basic block starting strictly after `today`, falling back to the
/// block that contains `today`.
///
/// Ties on `start_date` go to the block listed first.
pub fn select_target<'a>(basic: &[&'a Strategy], today: NaiveDate) -> Option<&'a Strategy> {
    let upcoming = basic
        .iter()
        .copied()
        .filter(|s| s.start_date > today)
        .min_by_key(|s| s.start_date);
    upcoming.or_else(|| basic.iter().copied().find(|s| s.contains(today)))
}

/// First leave plan, in source order, whose range overlaps `target`.
pub fn related_strategy<'a>(leave: &[&'a Strategy], target: &Strategy) -> Option<&'a Strategy> {
    leave.iter().copied().find(|s| s.overlaps(target))
}

/// Full selection for `today`. `None` means no holiday remains this year.
pub fn select(strategies: &[Strategy], today: NaiveDate) -> Option<Selection<'_>> {
    let parts = partition(strategies);
    let target = select_target(&parts.basic, today)?;
    Some(Selection {
        target,
        related: related_strategy(&parts.leave, target),
    })
}
