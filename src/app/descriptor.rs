//! Machine-readable application descriptor.
//!
//! `crabcount --describe` prints this as JSON so host tooling can discover
//! the application tag and its configurable surface without launching the
//! UI.

use crate::config::AppConfig;
use crate::i18n::SUPPORTED_LOCALES;
use serde::Serialize;

pub const APP_TAG: &str = "crabcount";

#[derive(Debug, Serialize)]
pub struct Descriptor {
    pub tag: &'static str,
    pub version: &'static str,
    pub locales: &'static [&'static str],
    pub bundle_dir: String,
    pub settings: Vec<Setting>,
}

#[derive(Debug, Serialize)]
pub struct Setting {
    pub key: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

pub fn describe(config: &AppConfig) -> Descriptor {
    Descriptor {
        tag: APP_TAG,
        version: env!("CARGO_PKG_VERSION"),
        locales: SUPPORTED_LOCALES,
        bundle_dir: config.ui.bundle_dir.display().to_string(),
        settings: vec![
            Setting {
                key: "ui.title",
                kind: "string",
                description: "Label shown in the title bar (overridden by the locale bundle)",
            },
            Setting {
                key: "ui.locale",
                kind: "string",
                description: "Language tag for the locale bundle to load",
            },
            Setting {
                key: "ui.bundle_dir",
                kind: "path",
                description: "Directory holding counter.<tag>.json locale bundles",
            },
            Setting {
                key: "effects.enabled",
                kind: "bool",
                description: "Whether the confetti burst plays at all",
            },
            Setting {
                key: "effects.palette_file",
                kind: "path",
                description: "Optional TOML palette override for the confetti colors",
            },
        ],
    }
}

pub fn render(config: &AppConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&describe(config))
}
