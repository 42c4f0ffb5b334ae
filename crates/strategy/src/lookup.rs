use chrono::NaiveDate;
use leavecal_model::Strategy;

/// First strategy, in source order, whose range contains `date`.
pub fn strategy_for_date(strategies: &[Strategy], date: NaiveDate) -> Option<&Strategy> {
    strategies.iter().find(|s| s.contains(date))
}
