use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "leavecal.toml";

/// Top-level leavecal configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeavecalConfig {
    /// Gregorian year the dataset covers.
    #[serde(default = "default_year")]
    pub year: i32,

    /// ROC year shown in document titles. Derived from `year` when absent.
    #[serde(default)]
    pub roc_year: Option<i32>,

    /// Input file locations.
    #[serde(default)]
    pub data: DataToml,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,

    /// Local preference storage.
    #[serde(default)]
    pub prefs: PrefsToml,

    /// Offline cache manifest.
    #[serde(default)]
    pub cache: CacheToml,
}

impl Default for LeavecalConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            roc_year: None,
            data: DataToml::default(),
            export: ExportToml::default(),
            prefs: PrefsToml::default(),
            cache: CacheToml::default(),
        }
    }
}

impl LeavecalConfig {
    pub fn roc_year(&self) -> i32 {
        self.roc_year.unwrap_or(self.year - 1911)
    }
}

fn default_year() -> i32 {
    2026
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_holidays_path")]
    pub holidays: PathBuf,
    #[serde(default = "default_calendar_path")]
    pub calendar: PathBuf,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            holidays: default_holidays_path(),
            calendar: default_calendar_path(),
        }
    }
}

fn default_holidays_path() -> PathBuf {
    PathBuf::from("data/holidays.json")
}
fn default_calendar_path() -> PathBuf {
    PathBuf::from("115年中華民國政府行政機關辦公日曆表.csv")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_prodid")]
    pub prodid: String,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            prodid: default_prodid(),
            uid_domain: default_uid_domain(),
            timezone: default_timezone(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_prodid() -> String {
    "-//TWCalendar//2026 Holiday Calendar//ZH".to_string()
}
fn default_uid_domain() -> String {
    "twcalendar.local".to_string()
}
fn default_timezone() -> String {
    "Asia/Taipei".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefsToml {
    #[serde(default = "default_prefs_path")]
    pub path: PathBuf,
}

impl Default for PrefsToml {
    fn default() -> Self {
        Self {
            path: default_prefs_path(),
        }
    }
}

fn default_prefs_path() -> PathBuf {
    PathBuf::from(".leavecal-prefs.json")
}

/// Empty `assets` keeps the built-in asset list.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CacheToml {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub assets: Vec<String>,
}

/// Parses a TOML document into a [`LeavecalConfig`].
pub fn parse(toml_str: &str) -> Result<LeavecalConfig> {
    toml::from_str(toml_str).context("failed to parse leavecal TOML")
}

/// Loads configuration.
///
/// With `explicit = None` the default path is tried and a missing file means
/// all defaults. An explicit path that cannot be read is an error.
pub fn load(explicit: Option<&Path>) -> Result<LeavecalConfig> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(LeavecalConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse(&toml_str).with_context(|| format!("in {}", path.display()))?;
    debug!(path = %path.display(), year = config.year, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.year, 2026);
        assert_eq!(cfg.roc_year(), 115);
        assert_eq!(cfg.data.holidays, PathBuf::from("data/holidays.json"));
        assert_eq!(cfg.export.uid_domain, "twcalendar.local");
        assert_eq!(cfg.prefs.path, PathBuf::from(".leavecal-prefs.json"));
        assert!(cfg.cache.assets.is_empty());
    }

    #[test]
    fn explicit_roc_year_wins() {
        let cfg = parse("year = 2027\nroc_year = 200\n").unwrap();
        assert_eq!(cfg.year, 2027);
        assert_eq!(cfg.roc_year(), 200);
        assert_eq!(parse("year = 2027").unwrap().roc_year(), 116);
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = parse(
            r#"
            [data]
            holidays = "h.json"

            [export]
            output_dir = "out"
            timezone = "UTC"

            [cache]
            version = "tw-calendar-v2"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.data.holidays, PathBuf::from("h.json"));
        assert_eq!(cfg.data.calendar, default_calendar_path());
        assert_eq!(cfg.export.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.export.timezone, "UTC");
        assert_eq!(cfg.export.prodid, default_prodid());
        assert_eq!(cfg.cache.version.as_deref(), Some("tw-calendar-v2"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("yaer = 2026").is_err());
        assert!(parse("[export]\nformat = \"pdf\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "year = 2030\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap().year, 2030);
    }
}
