//! Hourly VWAP engine over an ITCH trade feed
//!
//! Drives a single forward pass over the decoded byte stream: the frame
//! dispatcher routes trade payloads to the decoder, feeds the hourly
//! aggregator, and writes flushed VWAP tables to per-hour output files.
//! Everything is strictly sequential; message framing is a state machine
//! whose byte alignment would not survive interleaved reads.

pub mod aggregator;
pub mod config;
pub mod engine;
pub mod logging;
pub mod output;

pub use aggregator::{HourlyVwap, VwapRow};
pub use config::EngineConfig;
pub use engine::{open_feed, EngineStats, VwapEngine};
pub use output::OutputWriter;
