use anyhow::{Result, bail};
use chrono::Datelike;
use tracing::info_span;

use leavecal_grid::day_details;

use crate::cli::DayArgs;
use crate::render;
use crate::state::AppState;

pub fn run(args: &DayArgs, state: &AppState) -> Result<()> {
    let _span = info_span!("day", date = %args.date).entered();
    if args.date.year() != state.dataset.year {
        bail!(
            "{} is outside the loaded year {}",
            args.date,
            state.dataset.year
        );
    }
    print!("{}", render::day_view(&day_details(&state.dataset, args.date)));
    Ok(())
}
