use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use leavecal_io::{ExportFormat, Theme};

/// Holiday calendar, countdown and leave-strategy planner.
#[derive(Parser)]
#[command(
    name = "leavecal",
    version,
    about = "Holiday calendar, countdown and leave-strategy planner"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults apply if the default path is absent).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today instead of the local date.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the month or year calendar.
    Calendar(CalendarArgs),
    /// Count down to the next holiday block.
    Countdown(CountdownArgs),
    /// List leave strategies in ranked order.
    Strategies(StrategiesArgs),
    /// Show details for one date.
    Day(DayArgs),
    /// Export the dataset to files.
    Export(ExportArgs),
    /// Read or change the stored theme preference.
    Theme(ThemeArgs),
    /// Show the offline cache manifest and stale caches.
    Manifest(ManifestArgs),
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Month to show (1-12); out-of-range values clamp. Defaults to today's month.
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i32>,

    /// Show all twelve months.
    #[arg(long)]
    pub year_view: bool,

    /// Highlight suggested leave days.
    #[arg(long)]
    pub show_leave: bool,

    /// Open the month containing this strategy's start date.
    #[arg(long, conflicts_with_all = ["month", "year_view"])]
    pub strategy: Option<String>,
}

/// Arguments for the `countdown` subcommand.
#[derive(clap::Args)]
pub struct CountdownArgs {
    /// Keep updating every second until interrupted.
    #[arg(short, long)]
    pub watch: bool,
}

/// Arguments for the `strategies` subcommand.
#[derive(clap::Args)]
pub struct StrategiesArgs {
    /// Only strategies with at least this many days off.
    #[arg(long)]
    pub min_days: Option<u32>,

    /// Only strategies needing at most this many leave days.
    #[arg(long)]
    pub max_leave: Option<u32>,

    /// Drop strategies that only apply to labor-act employees.
    #[arg(long)]
    pub no_labor_only: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date to inspect (YYYY-MM-DD).
    pub date: NaiveDate,
}

/// Export formats selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Spreadsheet,
    Document,
    Ical,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Spreadsheet => ExportFormat::Spreadsheet,
            FormatArg::Document => ExportFormat::Document,
            FormatArg::Ical => ExportFormat::ICalendar,
        }
    }
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Formats to produce (repeatable). Defaults to all.
    #[arg(short, long, value_enum)]
    pub format: Vec<FormatArg>,

    /// Override the output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `theme` subcommand.
#[derive(clap::Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme.
    Get,
    /// Store a theme.
    Set {
        /// `light` or `dark`.
        theme: Theme,
    },
    /// Switch between light and dark.
    Toggle,
}

/// Arguments for the `manifest` subcommand.
#[derive(clap::Args)]
pub struct ManifestArgs {
    /// Names of caches currently present (repeatable).
    #[arg(long)]
    pub existing: Vec<String>,
}
