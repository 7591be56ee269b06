//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so tracing output goes to a dated
//! file under the configured log directory instead of stdout. Disabled by
//! default; any initialization failure degrades to no logging rather than
//! blocking the UI.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let log_dir = expand_tilde(&config.log_dir);
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("crabcount_{date}.log"));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn expand_tilde(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/logs"), home.join("logs"));
        }
        assert_eq!(expand_tilde("/var/log"), PathBuf::from("/var/log"));
    }
}
