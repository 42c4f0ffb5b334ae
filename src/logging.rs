use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Every workspace crate that logs.
const CRATE_TARGETS: &[&str] = &[
    "leavecal",
    "leavecal_calendar",
    "leavecal_countdown",
    "leavecal_grid",
    "leavecal_io",
    "leavecal_model",
    "leavecal_strategy",
];

/// `-v` count to level; warn when quiet.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `leavecal=info,leavecal_calendar=info,...`; third-party crates stay off.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity).to_string().to_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Logs to stderr so `countdown --watch` redraws and exported listings on
/// stdout stay clean. A valid `RUST_LOG` replaces the `-v` mapping.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
