//! Shared CLI scaffolding: global options, logging initialization, and a
//! chunk-count progress reporter for long `generate()` loops.

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options common to every `same-tools` binary.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct GlobalConfig {
    /// Enable debug-level logging
    #[arg(long)]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

/// Initializes `tracing_subscriber`'s fmt layer. `--debug` takes priority
/// over `--log-level`; both only affect this process's own max level.
pub fn init_logging(config: &GlobalConfig) -> Result<()> {
    let level: tracing::Level = if config.debug {
        tracing::Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(tracing::Level::INFO)
    };

    tracing_subscriber::fmt().with_max_level(level).init();

    Ok(())
}

/// Loads a TOML config value from a file.
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves a TOML config value to a file.
pub fn save_config<T: Serialize>(config: &T, path: &PathBuf) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Reports chunk-generation progress to stderr in 10% increments.
pub struct ProgressReporter {
    total: u64,
    current: u64,
    last_percent: u8,
    verbose: bool,
}

impl ProgressReporter {
    pub fn new(total: u64, verbose: bool) -> Self {
        Self {
            total,
            current: 0,
            last_percent: 0,
            verbose,
        }
    }

    pub fn update(&mut self, current: u64) {
        self.current = current;

        if self.verbose && self.total > 0 {
            let percent = ((self.current * 100) / self.total) as u8;
            if percent != self.last_percent && percent % 10 == 0 {
                tracing::info!("progress: {}%", percent);
                self.last_percent = percent;
            }
        }
    }

    pub fn complete(&mut self) {
        if self.verbose {
            tracing::info!("complete: {}/{} samples", self.current, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_config_default_is_info_level() {
        let config = GlobalConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.debug);
    }

    #[test]
    fn progress_reporter_tracks_current() {
        let mut reporter = ProgressReporter::new(100, false);
        reporter.update(50);
        assert_eq!(reporter.current, 50);
        reporter.complete();
    }
}
