/// Runtime configuration, read once at startup from a static JSON document.
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the configuration document is served from.
pub const CONFIG_PATH: &str = "/config.json";

/// Limit applied when the configuration does not supply one.
pub const DEFAULT_LIMIT: u32 = 1000;

/// Result-count choices offered by the limit selector. The control cannot
/// produce any other value.
pub const LIMIT_OPTIONS: [u32; 5] = [100, 500, 1000, 5000, 10000];

/// A past lookup, rendered verbatim in the history panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub domain: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub default_domain: String,
    pub default_limit: u32,
    pub blocklist: Vec<String>,
    pub history: Vec<HistoryEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_domain: String::new(),
            default_limit: DEFAULT_LIMIT,
            blocklist: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// Snap a configured limit to the nearest selectable option so the form and
/// the issued queries always agree. Ties resolve to the smaller option.
pub fn snap_limit(limit: u32) -> u32 {
    LIMIT_OPTIONS
        .into_iter()
        .min_by_key(|&option| (option.abs_diff(limit), option))
        .unwrap_or(DEFAULT_LIMIT)
}

// reqwest wants an absolute URL even on wasm, so resolve the fixed path
// against the page origin.
fn config_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| format!("{}{}", origin, CONFIG_PATH))
        .unwrap_or_else(|| CONFIG_PATH.to_string())
}

pub async fn load_config() -> Result<AppConfig> {
    let config = reqwest::get(config_url())
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(config)
}
