//! Configuration for the `same-gen` CLI: a `clap::Parser` derive struct
//! that doubles as a `serde`/`toml` config file schema, following the
//! same pattern the transmitter configuration used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Header and rendering configuration for one SAME/EAS burst sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    pub output_file: PathBuf,
    pub originator: String,
    pub event: String,
    pub locations: Vec<String>,
    pub valid_time: String,
    pub originator_time: String,
    pub callsign: String,
    pub attn_sig_duration: u32,
    pub sample_rate: f64,
    pub engine: SineEngine,
}

/// Which [`same_core::sine::SineOracle`] variant to drive the generator
/// with. `App` is intentionally absent here: it takes a Rust closure and
/// has no meaningful CLI/file representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SineEngine {
    Libc,
    Lut,
    Taylor,
}

impl Default for SineEngine {
    fn default() -> Self {
        SineEngine::Libc
    }
}

impl GenConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {:?}", path))?;

        let config: Self =
            toml::from_str(&content).context("failed to parse config file as TOML")?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file: {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GenConfig {
        GenConfig {
            output_file: PathBuf::from("test.wav"),
            originator: "WXR".to_string(),
            event: "TOR".to_string(),
            locations: vec!["048484".to_string(), "048024".to_string()],
            valid_time: "1000".to_string(),
            originator_time: "1172221".to_string(),
            callsign: "WAEB/AM ".to_string(),
            attn_sig_duration: 8,
            sample_rate: 44100.0,
            engine: SineEngine::Lut,
        }
    }

    #[test]
    fn round_trips_through_toml() {
        let config = sample_config();
        let mut path = std::env::temp_dir();
        path.push(format!("same-gen-test-{}.toml", std::process::id()));

        config.save_to_file(&path).unwrap();
        let loaded = GenConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.originator, loaded.originator);
        assert_eq!(config.locations, loaded.locations);
        assert_eq!(config.engine, loaded.engine);
    }

    #[test]
    fn default_engine_is_libc() {
        assert_eq!(SineEngine::default(), SineEngine::Libc);
    }
}
