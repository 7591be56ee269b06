//! Localized string bundles.
//!
//! The application registers a fixed set of supported locales once at
//! construction, pointing at a directory of JSON bundle files named
//! `counter.<tag>.json`. Bundles are flat string-to-string JSON objects,
//! loaded lazily on a spawned task and merged over the built-in English
//! table; lookups fall back to the base table for keys a bundle does not
//! translate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Language tags with a shipped bundle.
pub const SUPPORTED_LOCALES: &[&str] = &["ar", "es", "hi", "zh"];

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("failed to read bundle {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse bundle {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat key-to-text mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Merge `other` over this table; keys in `other` win.
    pub fn merge(&mut self, other: StringTable) {
        self.strings.extend(other.strings);
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let strings: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { strings })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

/// Read and parse a bundle file. Runs on the loader task, never on the
/// event loop.
pub fn read_bundle(path: &Path) -> Result<StringTable, I18nError> {
    let contents = std::fs::read_to_string(path).map_err(|source| I18nError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    StringTable::from_json(&contents).map_err(|source| I18nError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Process-wide localization support for the application. Registered once
/// at construction and never torn down.
#[derive(Debug)]
pub struct Localizer {
    locales: &'static [&'static str],
    bundle_dir: PathBuf,
    base: StringTable,
    overlay: StringTable,
    active: Option<String>,
}

impl Localizer {
    pub fn register(
        locales: &'static [&'static str],
        bundle_dir: PathBuf,
        base: StringTable,
    ) -> Self {
        Self {
            locales,
            bundle_dir,
            base,
            overlay: StringTable::new(),
            active: None,
        }
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.locales.contains(&tag)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// On-disk path of the bundle for `tag`, checked against the
    /// registered set.
    pub fn bundle_path(&self, tag: &str) -> Result<PathBuf, I18nError> {
        if !self.is_supported(tag) {
            return Err(I18nError::UnsupportedLocale(tag.to_string()));
        }
        Ok(self.bundle_dir.join(format!("counter.{tag}.json")))
    }

    /// Merge a loaded bundle over previous overlays and mark its tag
    /// active.
    pub fn merge_bundle(&mut self, tag: String, table: StringTable) {
        self.overlay.merge(table);
        self.active = Some(tag);
    }

    /// Translated string for `key`, falling back to the base table.
    pub fn t(&self, key: &str) -> Option<&str> {
        self.overlay.get(key).or_else(|| self.base.get(key))
    }

    /// Like [`t`](Self::t) but with a caller-supplied last resort.
    pub fn text<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.t(key).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localizer() -> Localizer {
        let mut base = StringTable::new();
        base.insert("title", "Counter");
        base.insert("quit", "quit");
        Localizer::register(SUPPORTED_LOCALES, PathBuf::from("locales"), base)
    }

    #[test]
    fn bundle_parses_flat_json() {
        let table = StringTable::from_json(r#"{"title": "Contador", "quit": "salir"}"#).unwrap();
        assert_eq!(table.get("title"), Some("Contador"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn malformed_bundle_is_a_parse_error() {
        assert!(StringTable::from_json(r#"{"title": 21}"#).is_err());
        assert!(StringTable::from_json("not json").is_err());
    }

    #[test]
    fn merge_overrides_title() {
        let mut l = localizer();
        assert_eq!(l.t("title"), Some("Counter"));
        let table = StringTable::from_json(r#"{"title": "Contador"}"#).unwrap();
        l.merge_bundle("es".into(), table);
        assert_eq!(l.t("title"), Some("Contador"));
        assert_eq!(l.active(), Some("es"));
    }

    #[test]
    fn missing_key_falls_back_to_base() {
        let mut l = localizer();
        l.merge_bundle("es".into(), StringTable::from_json(r#"{"title": "Contador"}"#).unwrap());
        // "quit" not translated; base table answers
        assert_eq!(l.t("quit"), Some("quit"));
        assert_eq!(l.t("nonexistent"), None);
        assert_eq!(l.text("nonexistent", "fallback"), "fallback");
    }

    #[test]
    fn unsupported_tag_is_rejected() {
        let l = localizer();
        assert!(!l.is_supported("fr"));
        assert!(matches!(
            l.bundle_path("fr"),
            Err(I18nError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn bundle_path_layout() {
        let l = localizer();
        assert_eq!(
            l.bundle_path("ar").unwrap(),
            PathBuf::from("locales/counter.ar.json")
        );
    }

    #[test]
    fn read_bundle_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.zh.json");
        std::fs::write(&path, r#"{"title": "计数器"}"#).unwrap();
        let table = read_bundle(&path).unwrap();
        assert_eq!(table.get("title"), Some("计数器"));
    }

    #[test]
    fn missing_bundle_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bundle(&dir.path().join("counter.ar.json")).unwrap_err();
        assert!(matches!(err, I18nError::Read { .. }));
    }
}
