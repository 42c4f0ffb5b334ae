use chrono::NaiveDate;
use leavecal_model::Strategy;
use leavecal_strategy::{StrategyFilter, rank_strategies};

fn plan(idx: usize, cp: f64, total: u32) -> Strategy {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let mut s = Strategy::basic(idx.to_string(), format!("plan {idx}"), start, start);
    s.cp_value = cp;
    s.total_days = total;
    s.leave_count = 1;
    s
}

/// Deterministic mix with plenty of ties on both keys.
fn mixed() -> Vec<Strategy> {
    let cps = [2.0, 0.0, 4.5, 2.0, 1.0, 4.5, 2.0, 0.0, 3.0, 2.0];
    let totals = [9, 3, 16, 9, 4, 10, 5, 3, 9, 9];
    cps.iter()
        .zip(totals)
        .enumerate()
        .map(|(i, (&cp, total))| plan(i, cp, total))
        .collect()
}

#[test]
fn ranked_order_respects_keys_and_stability() {
    let input = mixed();
    let ranked = rank_strategies(&input);
    assert_eq!(ranked.len(), input.len());

    for pair in ranked.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.cp_value >= b.cp_value, "{} before {}", a.id, b.id);
        if a.cp_value == b.cp_value {
            assert!(a.total_days >= b.total_days, "{} before {}", a.id, b.id);
            if a.total_days == b.total_days {
                let ia: usize = a.id.parse().unwrap();
                let ib: usize = b.id.parse().unwrap();
                assert!(ia < ib, "tie order not preserved: {ia} vs {ib}");
            }
        }
    }
}

#[test]
fn ranked_ids_for_known_input() {
    let input = mixed();
    let ids: Vec<&str> = rank_strategies(&input).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["2", "5", "8", "0", "3", "9", "6", "4", "1", "7"]);
}

#[test]
fn filter_then_rank() {
    let input = mixed();
    let kept: Vec<Strategy> = StrategyFilter::default()
        .with_min_days(Some(9))
        .apply(&input)
        .into_iter()
        .cloned()
        .collect();
    let ids: Vec<&str> = rank_strategies(&kept).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["2", "5", "8", "0", "3", "9"]);
}
