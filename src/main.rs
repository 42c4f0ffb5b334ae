mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod countdown_cmd;
mod day_cmd;
mod export_cmd;
mod logging;
mod manifest_cmd;
mod render;
mod state;
mod strategies_cmd;
mod theme_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::state::AppState;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match &cli.command {
        // Neither touches the holiday data.
        Command::Theme(args) => theme_cmd::run(args, &config),
        Command::Manifest(args) => manifest_cmd::run(args, &config),
        command => {
            let state = AppState::load(config, cli.today)?;
            dispatch(command, &state)
        }
    }
}

fn dispatch(command: &Command, state: &AppState) -> Result<()> {
    match command {
        Command::Calendar(args) => calendar_cmd::run(args, state),
        Command::Countdown(args) => countdown_cmd::run(args, state),
        Command::Strategies(args) => strategies_cmd::run(args, state),
        Command::Day(args) => day_cmd::run(args, state),
        Command::Export(args) => export_cmd::run(args, state),
        Command::Theme(_) | Command::Manifest(_) => Ok(()),
    }
}
