//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the
//! box with no config file present. This file holds ambient knobs only:
//! the font size and scrolling speed the user adjusts in-app live in the
//! script store, not here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Maximum characters of a script shown per row on the home screen.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
    /// Whether the prompter starts mirrored for glass reflection.
    #[serde(default = "default_true")]
    pub mirror: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
            mirror: true,
        }
    }
}

/// Where the script store lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Override for the store directory. Defaults to
    /// `~/.local/share/crabprompt/store`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| default_data_root().join("store"))
    }
}

/// Diagnostic logging settings. Log output goes to a file; stdout belongs
/// to the TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabprompt")
}

fn default_preview_length() -> usize {
    100
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> PathBuf {
    default_data_root().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.preview_length, 100);
        assert!(cfg.ui.mirror);
        assert!(!cfg.logging.enabled);
        assert!(cfg.storage.data_dir.is_none());
    }

    #[test]
    fn partial_toml_fills_in_the_rest() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            mirror = false

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(!cfg.ui.mirror);
        assert_eq!(cfg.ui.preview_length, 100);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
    }
}
