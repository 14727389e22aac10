//! Diagnostic logging setup
//!
//! Recovered decode errors are visible only here; fatal errors additionally
//! surface on stderr through the process exit path.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with a file sink under `log_dir/vwap.log`.
///
/// The directory is created if absent. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("vwap.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {:?}", log_path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

/// Test-friendly initialization writing to the test capture buffer.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();
}
