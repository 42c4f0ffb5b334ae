use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use leavecal_countdown::{CancelHandle, Countdown, CountdownState, Tick, Ticker};

use crate::cli::CountdownArgs;
use crate::render;
use crate::state::AppState;

/// ANSI: cursor home, clear screen.
const CLEAR: &str = "\x1b[H\x1b[2J";

pub fn run(args: &CountdownArgs, state: &AppState) -> Result<()> {
    let _span = info_span!("countdown", watch = args.watch).entered();
    let mut countdown = Countdown::new(&state.dataset.strategies, state.now());

    if !args.watch {
        print!(
            "{}",
            render::countdown_view(&countdown.tick(state.now()), state.dataset.year)
        );
        return Ok(());
    }

    let cancel = CancelHandle::new();
    signal_hook::flag::register(signal_hook::consts::SIGINT, cancel.flag())
        .context("failed to install Ctrl-C handler")?;
    let ticker = Ticker::every_second().with_cancel(cancel);

    let mut stdout = std::io::stdout();
    let ticks = ticker.run(|_| {
        let current = countdown.tick(state.now());
        let frame = render::countdown_view(&current, state.dataset.year);
        if let Err(e) = write!(stdout, "{CLEAR}{frame}").and_then(|()| stdout.flush()) {
            warn!(error = %e, "stdout closed, stopping countdown");
            return Tick::Stop;
        }
        if current == CountdownState::NoMoreHolidays {
            Tick::Stop
        } else {
            Tick::Continue
        }
    });
    info!(ticks, "countdown stopped");
    Ok(())
}
