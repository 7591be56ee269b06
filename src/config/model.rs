//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the
//! box with no config file at all.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the title bar; a loaded locale bundle's `"title"`
    /// entry overrides it.
    #[serde(default = "default_title")]
    pub title: String,
    /// Language tag to load a bundle for (`ar`, `es`, `hi`, `zh`).
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_bundle_dir")]
    pub bundle_dir: PathBuf,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            locale: None,
            bundle_dir: default_bundle_dir(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Confetti settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Optional TOML palette override (`colors = ["#rrggbb", ...]`).
    #[serde(default)]
    pub palette_file: Option<PathBuf>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            palette_file: None,
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_title() -> String {
    "Counter".to_string()
}
fn default_bundle_dir() -> PathBuf {
    PathBuf::from("locales")
}
fn default_tick_rate() -> u64 {
    50
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/crabcount/logs".to_string()
}
