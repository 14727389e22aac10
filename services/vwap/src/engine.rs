//! Frame dispatcher / driver loop
//!
//! Reads one tag at a time, skips known non-trade payloads by their table
//! length, decodes trade payloads, and drives the aggregator's flush logic.
//! Framing-integrity failures (truncation mid-record, unknown tag) abort the
//! run; per-trade decode failures are logged and the pass continues, since
//! the bad message's bytes were already consumed and alignment holds.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tracing::{info, warn};

use itch::{ByteCursor, MessageType, ParseError, TradeRecord, TRADE_PAYLOAD_LEN};

use crate::aggregator::HourlyVwap;
use crate::output::OutputWriter;

/// Externally observable progress of one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Tags processed, skip and trade alike
    pub messages: u64,
    /// Trade messages decoded successfully
    pub trades: u64,
    /// Trade messages dropped after a recoverable decode failure
    pub decode_errors: u64,
    /// Trades decoded with a null symbol (excluded from aggregation)
    pub null_symbols: u64,
    /// VWAP rows written across all flushes
    pub rows: u64,
}

/// Open the input feed: `.gz` files are decompressed on the fly, anything
/// else is treated as a raw pre-decompressed capture.
pub fn open_feed(path: &Path) -> Result<Box<dyn Read>> {
    let file =
        File::open(path).with_context(|| format!("failed to open input file {:?}", path))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub struct VwapEngine<R: Read> {
    cursor: ByteCursor<R>,
    aggregator: HourlyVwap,
    writer: OutputWriter,
    progress_interval: u64,
}

impl<R: Read> VwapEngine<R> {
    pub fn new(reader: R, writer: OutputWriter, progress_interval: u64) -> Self {
        Self {
            cursor: ByteCursor::new(reader),
            aggregator: HourlyVwap::new(),
            writer,
            progress_interval: progress_interval.max(1),
        }
    }

    /// Single forward pass to stream exhaustion or a fatal error.
    ///
    /// On clean end of stream the trailing bucket is finalized exactly once.
    /// After a fatal framing error no finalize runs: alignment past the
    /// failure point cannot be trusted, so the partial bucket is discarded.
    pub fn run(mut self) -> Result<EngineStats> {
        let started = Instant::now();
        let mut stats = EngineStats::default();

        loop {
            let Some(tag) = self.cursor.read_tag()? else {
                let rows = self.aggregator.finalize();
                stats.rows += rows.len() as u64;
                self.writer.write_rows(&rows)?;
                break;
            };

            let message_type = MessageType::try_from(tag)
                .map_err(|_| ParseError::UnknownMessageType(tag))?;

            if message_type.is_trade() {
                let mut payload = [0u8; TRADE_PAYLOAD_LEN];
                self.cursor.read_exact(&mut payload)?;
                match TradeRecord::decode(&payload) {
                    Ok(record) => self.observe_trade(&record, &mut stats)?,
                    Err(e) => {
                        stats.decode_errors += 1;
                        warn!("error parsing trade message: {e}");
                    }
                }
            } else {
                self.cursor.skip(message_type.payload_len())?;
            }

            stats.messages += 1;
            if stats.messages % self.progress_interval == 0 {
                info!(
                    messages = stats.messages,
                    trades = stats.trades,
                    "progress"
                );
            }
        }

        info!(
            messages = stats.messages,
            trades = stats.trades,
            decode_errors = stats.decode_errors,
            rows = stats.rows,
            elapsed = ?started.elapsed(),
            "stream processed"
        );
        Ok(stats)
    }

    fn observe_trade(&mut self, record: &TradeRecord, stats: &mut EngineStats) -> Result<()> {
        stats.trades += 1;
        let Some(symbol) = record.symbol.as_deref() else {
            stats.null_symbols += 1;
            return Ok(());
        };

        let flushed = self
            .aggregator
            .observe(record.hour(), symbol, record.price, record.shares);
        stats.rows += flushed.len() as u64;
        self.writer.write_rows(&flushed)
    }
}
