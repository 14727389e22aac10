//! CLI entry point: hourly VWAP tables from a compressed ITCH capture

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vwap::{open_feed, EngineConfig, OutputWriter, VwapEngine};

#[derive(Parser)]
#[command(name = "vwap", about = "Hourly per-symbol VWAP from an ITCH 5.0-style feed")]
struct Args {
    /// Input capture (.gz, or raw pre-decompressed binary)
    file: PathBuf,

    /// Optional TOML config file
    #[arg(long, default_value = "vwap.toml")]
    config: PathBuf,

    /// Override the configured output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Override the configured log directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = EngineConfig::load(&args.config)?;
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(dir) = args.log_dir {
        config.log_dir = dir;
    }

    vwap::logging::init(&config.log_dir)?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create output directory {:?}", config.output_dir))?;

    info!(file = ?args.file, output = ?config.output_dir, "starting VWAP engine");

    let reader = open_feed(&args.file)?;
    let writer = OutputWriter::new(&config.output_dir);
    let stats = VwapEngine::new(reader, writer, config.progress_interval).run()?;

    info!(
        messages = stats.messages,
        trades = stats.trades,
        rows = stats.rows,
        "done"
    );
    Ok(())
}
