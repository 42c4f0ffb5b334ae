use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use leavecal_grid::{CalendarView, GridContext, ViewMode, build_month, build_year};

use crate::cli::CalendarArgs;
use crate::render;
use crate::state::AppState;

/// Resolves the view from the flags, then renders it.
pub fn run(args: &CalendarArgs, state: &AppState) -> Result<()> {
    let _span = info_span!("calendar").entered();
    let view = resolve_view(args, state)?;
    debug!(
        month = view.month().month1(),
        mode = ?view.mode(),
        show_leave = view.show_leave_days(),
        "calendar view"
    );

    let ctx = GridContext::new(&state.dataset, state.today())
        .with_show_leave_days(view.show_leave_days());
    let out = match view.mode() {
        ViewMode::Month => {
            let grid = build_month(&ctx, view.year(), view.month())
                .context("failed to build month grid")?;
            render::month_view(&grid)
        }
        ViewMode::Year => {
            let grid = build_year(&ctx, view.year()).context("failed to build year grid")?;
            render::year_view(&grid)
        }
    };
    print!("{out}");
    Ok(())
}

fn resolve_view(args: &CalendarArgs, state: &AppState) -> Result<CalendarView> {
    let mut view = CalendarView::new(state.dataset.year);
    view.go_to_today(state.today());
    view.set_show_leave_days(args.show_leave);

    if let Some(id) = &args.strategy {
        let Some(strategy) = state.dataset.strategies.iter().find(|s| &s.id == id) else {
            bail!("no strategy with id {id:?}");
        };
        // Opening a plan implies showing its suggested days.
        view.set_show_leave_days(true);
        view.go_to_date(strategy.start_date);
    } else if args.year_view {
        view.set_mode(ViewMode::Year);
    } else if let Some(month) = args.month {
        view.set_month(month - 1);
    }
    Ok(view)
}
