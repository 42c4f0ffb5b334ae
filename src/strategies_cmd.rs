use anyhow::Result;
use tracing::{info, info_span};

use leavecal_strategy::{StrategyFilter, rank_strategies};

use crate::cli::StrategiesArgs;
use crate::render;
use crate::state::AppState;

pub fn run(args: &StrategiesArgs, state: &AppState) -> Result<()> {
    let _span = info_span!("strategies").entered();
    let filter = StrategyFilter::default()
        .with_min_days(args.min_days)
        .with_max_leave_days(args.max_leave)
        .with_labor_only(!args.no_labor_only);

    let ranked: Vec<_> = rank_strategies(&state.dataset.strategies)
        .into_iter()
        .filter(|s| filter.matches(s))
        .collect();
    info!(
        n_total = state.dataset.strategies.len(),
        n_shown = ranked.len(),
        "strategies ranked"
    );
    print!("{}", render::strategies_view(&ranked));
    Ok(())
}
