//! Per-hour VWAP table files
//!
//! One text file per observed hour label under the output directory
//! (`9.txt` for 9 AM), space-delimited `time symbol vwap` rows. The header
//! is written exactly once, when the file is first created; later flushes
//! for the same hour append rows only. File handles live for a single
//! flush call.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::aggregator::VwapRow;

const HEADER: &str = "time symbol vwap";

pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Append one flush's rows to the hour file they belong to.
    ///
    /// Rows within a single flush share one hour by construction, but the
    /// writer does not rely on that: each row goes to its own hour's file.
    pub fn write_rows(&self, rows: &[VwapRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut hours: Vec<u8> = rows.iter().map(|row| row.hour).collect();
        hours.sort_unstable();
        hours.dedup();

        for hour in hours {
            let path = self.hour_file(hour);
            let new_file = !path.exists();
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;

            if new_file {
                writeln!(file, "{HEADER}")
                    .with_context(|| format!("failed to write header to {}", path.display()))?;
            }
            for row in rows.iter().filter(|row| row.hour == hour) {
                writeln!(file, "{} {} {:.2}", row.hour_label(), row.symbol, row.vwap)
                    .with_context(|| format!("failed to write row to {}", path.display()))?;
            }
        }
        Ok(())
    }

    fn hour_file(&self, hour: u8) -> PathBuf {
        self.dir.join(format!("{hour}.txt"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
