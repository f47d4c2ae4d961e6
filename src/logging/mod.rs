//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber writing to a daily file in
//! the configured log directory (default:
//! `~/.local/share/crabprompt/logs/`). The terminal itself is owned by the
//! TUI, so nothing is ever logged to stdout/stderr.

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            config.log_dir.display()
        )
    })?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = config.log_dir.join(format!("crabprompt_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(level = %level, "logging initialized");
    Ok(())
}
