//! Hourly VWAP aggregation
//!
//! One active bucket at a time, keyed by hour-of-day. Memory is bounded by
//! the number of distinct symbols seen within a single hour, independent of
//! total stream length. The stream is assumed non-decreasing in time; a
//! flushed bucket is never reopened (a time regression logs a warning and
//! opens a fresh bucket for that hour).

use std::collections::HashMap;

use tracing::warn;

/// One finalized output row: `(hour_label, symbol, vwap)`
#[derive(Debug, Clone, PartialEq)]
pub struct VwapRow {
    pub hour: u8,
    pub symbol: String,
    pub vwap: f64,
}

impl VwapRow {
    /// Hour label as it appears in output rows and file names, e.g. `9:00:00`
    pub fn hour_label(&self) -> String {
        format!("{}:00:00", self.hour)
    }
}

/// Incremental per-(hour, symbol) amount/volume accumulator
#[derive(Debug, Default)]
pub struct HourlyVwap {
    current_hour: Option<u8>,
    /// symbol -> (sum of price*volume, sum of volume)
    sums: HashMap<String, (f64, u64)>,
    /// Highest hour already flushed, for regression diagnostics only
    last_flushed_hour: Option<u8>,
}

impl HourlyVwap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trade into the bucket for `hour`.
    ///
    /// Returns the rows of the previous bucket when `hour` differs from the
    /// active bucket hour (flush-on-transition); otherwise an empty vec.
    pub fn observe(&mut self, hour: u8, symbol: &str, price: f64, volume: u32) -> Vec<VwapRow> {
        let flushed = match self.current_hour {
            Some(current) if current != hour => {
                if self.last_flushed_hour.is_some_and(|last| hour <= last) {
                    warn!(
                        hour,
                        last_flushed = self.last_flushed_hour,
                        "non-monotonic hour observed, opening a fresh bucket"
                    );
                }
                self.flush()
            }
            _ => Vec::new(),
        };

        self.current_hour = Some(hour);
        let entry = self.sums.entry(symbol.to_string()).or_insert((0.0, 0));
        entry.0 += price * f64::from(volume);
        entry.1 += u64::from(volume);

        flushed
    }

    /// Finalize the active bucket: one row per symbol with volume, VWAP
    /// rounded to two decimals. Clears all bucket state; an empty bucket
    /// yields no rows.
    pub fn flush(&mut self) -> Vec<VwapRow> {
        let Some(hour) = self.current_hour.take() else {
            return Vec::new();
        };
        self.last_flushed_hour = Some(hour);

        let rows = self
            .sums
            .drain()
            .filter(|(_, (_, volume))| *volume > 0)
            .map(|(symbol, (amount, volume))| VwapRow {
                hour,
                symbol,
                vwap: round2(amount / volume as f64),
            })
            .collect();
        rows
    }

    /// Terminal flush at stream end so the trailing hour is never lost.
    pub fn finalize(&mut self) -> Vec<VwapRow> {
        self.flush()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
