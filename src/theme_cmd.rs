use anyhow::Result;
use tracing::info_span;

use leavecal_io::Theme;

use crate::cli::{ThemeAction, ThemeArgs};
use crate::convert;
use crate::config::LeavecalConfig;

/// A terminal has no reliable dark-mode query, so the system default is light.
const SYSTEM_PREFERS_DARK: bool = false;

/// Preference writes that fail are logged and the chosen theme still applies
/// to this run.
pub fn run(args: &ThemeArgs, config: &LeavecalConfig) -> Result<()> {
    let _span = info_span!("theme").entered();
    let store = convert::build_preference_store(config);
    let theme = match args.action.as_ref().unwrap_or(&ThemeAction::Get) {
        ThemeAction::Get => Theme::resolve(store.theme(), SYSTEM_PREFERS_DARK),
        ThemeAction::Set { theme } => {
            store.set_theme(*theme);
            *theme
        }
        ThemeAction::Toggle => store.toggle_theme(SYSTEM_PREFERS_DARK),
    };
    println!("{theme}");
    Ok(())
}
