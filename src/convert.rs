//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use leavecal_io::{CacheManifest, ExportSettings, LoadConfig, PreferenceStore};

use crate::config::{CacheToml, ExportToml, LeavecalConfig};

/// Builds the dataset loader config from `year` and `[data]`.
pub fn build_load_config(config: &LeavecalConfig) -> Result<LoadConfig> {
    if !(1912..=9999).contains(&config.year) {
        bail!("year must be between 1912 and 9999, got {}", config.year);
    }
    Ok(LoadConfig::default()
        .with_year(config.year)
        .with_holidays(&config.data.holidays)
        .with_calendar(&config.data.calendar))
}

/// Builds export settings from `[export]`.
pub fn build_export_settings(export: &ExportToml) -> Result<ExportSettings> {
    if export.uid_domain.trim().is_empty() {
        bail!("export.uid_domain must not be empty");
    }
    if export.uid_domain.contains(['@', ' ']) {
        bail!("export.uid_domain must be a bare host name, got {:?}", export.uid_domain);
    }
    if export.timezone.trim().is_empty() {
        bail!("export.timezone must not be empty");
    }
    Ok(ExportSettings {
        prodid: export.prodid.clone(),
        uid_domain: export.uid_domain.clone(),
        timezone: export.timezone.clone(),
    })
}

/// Opens the theme preference store at `[prefs].path`.
pub fn build_preference_store(config: &LeavecalConfig) -> PreferenceStore {
    PreferenceStore::new(&config.prefs.path)
}

/// Built-in manifest with `[cache]` overrides applied.
pub fn build_cache_manifest(cache: &CacheToml) -> CacheManifest {
    let mut manifest = CacheManifest::default();
    if let Some(version) = &cache.version {
        manifest.version = version.clone();
    }
    if !cache.assets.is_empty() {
        manifest.assets = cache.assets.clone();
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn load_config_carries_year_and_paths() {
        let cfg = config::parse("year = 2027\n[data]\nholidays = \"x.json\"").unwrap();
        let load = build_load_config(&cfg).unwrap();
        assert_eq!(load.year(), 2027);
        assert_eq!(load.holidays().to_str(), Some("x.json"));
    }

    #[test]
    fn pre_republic_year_is_rejected() {
        let cfg = config::parse("year = 1900").unwrap();
        assert!(build_load_config(&cfg).is_err());
    }

    #[test]
    fn uid_domain_must_be_a_host() {
        let mut export = ExportToml::default();
        assert!(build_export_settings(&export).is_ok());
        export.uid_domain = "me@example.com".to_string();
        assert!(build_export_settings(&export).is_err());
        export.uid_domain = "  ".to_string();
        assert!(build_export_settings(&export).is_err());
    }

    #[test]
    fn cache_overrides_apply_only_when_set() {
        let default = build_cache_manifest(&CacheToml::default());
        assert_eq!(default, CacheManifest::default());

        let custom = build_cache_manifest(&CacheToml {
            version: Some("tw-calendar-v2".to_string()),
            assets: vec!["/".to_string()],
        });
        assert_eq!(custom.version, "tw-calendar-v2");
        assert_eq!(custom.assets, vec!["/".to_string()]);
    }
}
