//! Display ordering for strategies.

use std::cmp::Ordering;

use leavecal_model::Strategy;
use tracing::debug;

/// Display comparison: higher `cp_value` first, then more `total_days`.
///
/// Returns [`Ordering::Equal`] for ties on both keys so a stable sort keeps
/// source order.
pub fn compare_for_display(a: &Strategy, b: &Strategy) -> Ordering {
    b.cp_value
        .total_cmp(&a.cp_value)
        .then_with(|| b.total_days.cmp(&a.total_days))
}

/// Returns the strategies in display order without touching the input.
pub fn rank_strategies(strategies: &[Strategy]) -> Vec<&Strategy> {
    let mut ranked: Vec<&Strategy> = strategies.iter().collect();
    ranked.sort_by(|a, b| compare_for_display(a, b));
    debug!(n = ranked.len(), "ranked strategies");
    ranked
}
