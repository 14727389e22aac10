//! Engine configuration
//!
//! Optional TOML file with sensible defaults; a missing file is not an
//! error. CLI flags override whatever the file provides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory receiving the per-hour VWAP tables
    pub output_dir: PathBuf,
    /// Directory receiving the diagnostic log
    pub log_dir: PathBuf,
    /// Emit a progress log line every this many processed messages
    pub progress_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            log_dir: PathBuf::from("logs"),
            progress_interval: 1_000_000,
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {:?}", path))?;
        let config: Self = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse config file: {:?}", path))?;

        tracing::info!("loaded configuration from {:?}", path);
        Ok(config)
    }
}
