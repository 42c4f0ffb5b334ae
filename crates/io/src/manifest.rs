//! Offline asset cache manifest.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Versioned list of assets cached for offline use.
///
/// Bumping `version` invalidates every existing cache wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheManifest {
    pub version: String,
    pub assets: Vec<String>,
}

impl Default for CacheManifest {
    fn default() -> Self {
        let assets = [
            "/",
            "/index.html",
            "/css/index.css",
            "/js/utils.js",
            "/js/calendar.js",
            "/js/countdown.js",
            "/js/strategies.js",
            "/js/export.js",
            "/js/app.js",
            "/data/holidays.json",
            "/manifest.json",
        ];
        Self {
            version: "tw-calendar-v1".to_string(),
            assets: assets.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl CacheManifest {
    pub fn is_cached(&self, url: &str) -> bool {
        self.assets.iter().any(|a| a == url)
    }

    /// Cache names to delete on activation: everything but the current version.
    pub fn stale_caches<'a>(&self, existing: &'a [String]) -> Vec<&'a str> {
        let stale: Vec<&str> = existing
            .iter()
            .map(String::as_str)
            .filter(|name| *name != self.version)
            .collect();
        if !stale.is_empty() {
            info!(version = %self.version, n_stale = stale.len(), "pruning stale caches");
        }
        stale
    }
}
