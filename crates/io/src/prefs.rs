//! Local preference storage. The theme is the only persisted value.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::IoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The saved choice wins; otherwise follow the system's dark preference.
    pub fn resolve(saved: Option<Theme>, system_prefers_dark: bool) -> Self {
        saved.unwrap_or(if system_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// JSON file holding [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files yield empty preferences.
    pub fn load(&self) -> Preferences {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt preferences");
                Preferences::default()
            }),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no stored preferences");
                Preferences::default()
            }
        }
    }

    /// # Errors
    ///
    /// [`IoError::Json`] or [`IoError::Io`] when the file cannot be written.
    pub fn save(&self, prefs: &Preferences) -> Result<(), IoError> {
        let text = serde_json::to_string_pretty(prefs)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| IoError::io(parent, &e))?;
        }
        std::fs::write(&self.path, text).map_err(|e| IoError::io(&self.path, &e))
    }

    pub fn theme(&self) -> Option<Theme> {
        self.load().theme
    }

    /// Stores `theme`. Failures are logged and otherwise ignored.
    pub fn set_theme(&self, theme: Theme) {
        let mut prefs = self.load();
        prefs.theme = Some(theme);
        if let Err(e) = self.save(&prefs) {
            error!(error = %e, "failed to store theme preference");
        }
    }

    /// Flips the current theme (resolved against `system_prefers_dark`),
    /// stores it and returns it.
    pub fn toggle_theme(&self, system_prefers_dark: bool) -> Theme {
        let next = Theme::resolve(self.theme(), system_prefers_dark).toggled();
        self.set_theme(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_and_display() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn resolve_prefers_saved() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn round_trip_and_toggle() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = PreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.theme(), None);

        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Some(Theme::Dark));
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"dark\""));

        assert_eq!(store.toggle_theme(false), Theme::Light);
        assert_eq!(store.theme(), Some(Theme::Light));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(PreferenceStore::new(path).load(), Preferences::default());
    }
}
