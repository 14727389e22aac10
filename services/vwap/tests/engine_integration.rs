//! End-to-end runs over gzipped fixtures
//!
//! Builds small synthetic ITCH captures, compresses them the way real
//! captures arrive, and checks the per-hour output files.

use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use itch::{MessageType, TradeRecord};
use vwap::{open_feed, OutputWriter, VwapEngine};

fn skip_message(tag: u8, fill: u8) -> Vec<u8> {
    let len = MessageType::try_from(tag).unwrap().payload_len();
    let mut msg = vec![tag];
    msg.extend(std::iter::repeat(fill).take(len));
    msg
}

fn trade_message(timestamp_ns: u64, symbol: &str, price: f64, shares: u32) -> Vec<u8> {
    let record = TradeRecord {
        stock_locate: 3,
        tracking_number: 1,
        timestamp_ns,
        order_ref_no: 42,
        buy_sell_indicator: b'S',
        shares,
        symbol: Some(symbol.to_string()),
        price,
        match_no: 9,
    };
    let mut msg = vec![b'P'];
    msg.extend_from_slice(&record.to_bytes());
    msg
}

fn write_gz_fixture(path: &Path, stream: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(stream).unwrap();
    encoder.finish().unwrap();
}

const NS_PER_HOUR: u64 = 3_600_000_000_000;

#[test]
fn gzipped_capture_produces_hourly_tables() {
    vwap::logging::init_for_tests();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("capture.gz");
    let output_dir = dir.path().join("output");
    std::fs::create_dir_all(&output_dir).unwrap();

    let mut stream = Vec::new();
    stream.extend(skip_message(b'S', 0x00));
    stream.extend(skip_message(b'R', 0x11));
    stream.extend(trade_message(9 * NS_PER_HOUR + 60_000_000_000, "AAPL", 10.0, 100));
    stream.extend(trade_message(9 * NS_PER_HOUR + 120_000_000_000, "AAPL", 20.0, 100));
    stream.extend(trade_message(9 * NS_PER_HOUR + 180_000_000_000, "MSFT", 50.0, 10));
    stream.extend(skip_message(b'A', 0x22));
    stream.extend(trade_message(10 * NS_PER_HOUR + 1_000_000_000, "AAPL", 30.0, 50));
    write_gz_fixture(&input, &stream);

    let reader = open_feed(&input).unwrap();
    let stats = VwapEngine::new(reader, OutputWriter::new(&output_dir), 2)
        .run()
        .unwrap();

    assert_eq!(stats.messages, 7);
    assert_eq!(stats.trades, 4);
    assert_eq!(stats.decode_errors, 0);
    assert_eq!(stats.rows, 3);

    let hour9 = std::fs::read_to_string(output_dir.join("9.txt")).unwrap();
    let mut lines: Vec<&str> = hour9.lines().collect();
    assert_eq!(lines.remove(0), "time symbol vwap");
    lines.sort_unstable();
    assert_eq!(lines, vec!["9:00:00 AAPL 15.00", "9:00:00 MSFT 50.00"]);

    let hour10 = std::fs::read_to_string(output_dir.join("10.txt")).unwrap();
    assert_eq!(hour10, "time symbol vwap\n10:00:00 AAPL 30.00\n");
}

#[test]
fn raw_capture_without_gz_extension_is_passthrough() {
    vwap::logging::init_for_tests();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("capture.bin");
    let output_dir = dir.path().join("output");
    std::fs::create_dir_all(&output_dir).unwrap();

    let mut stream = Vec::new();
    stream.extend(trade_message(14 * NS_PER_HOUR, "QQQ", 500.25, 10));
    std::fs::write(&input, &stream).unwrap();

    let reader = open_feed(&input).unwrap();
    let stats = VwapEngine::new(reader, OutputWriter::new(&output_dir), 1000)
        .run()
        .unwrap();
    assert_eq!(stats.trades, 1);

    let hour14 = std::fs::read_to_string(output_dir.join("14.txt")).unwrap();
    assert_eq!(hour14, "time symbol vwap\n14:00:00 QQQ 500.25\n");
}

#[test]
fn truncated_gzip_stream_fails_mid_record() {
    vwap::logging::init_for_tests();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("capture.gz");
    let output_dir = dir.path().join("output");
    std::fs::create_dir_all(&output_dir).unwrap();

    let mut stream = skip_message(b'F', 0x33);
    stream.truncate(stream.len() - 5);
    write_gz_fixture(&input, &stream);

    let reader = open_feed(&input).unwrap();
    let err = VwapEngine::new(reader, OutputWriter::new(&output_dir), 1000)
        .run()
        .unwrap_err();
    let parse = err.downcast_ref::<itch::ParseError>().unwrap();
    assert!(matches!(
        parse,
        itch::ParseError::TruncatedStream { need: 39, got: 34 }
    ));
}
