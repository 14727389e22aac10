//! Trade (`P`) message decoding
//!
//! Fixed-layout payload, all multi-byte integers big-endian:
//!
//! ```text
//! offset  size  field
//! 0       2     stock_locate
//! 2       2     tracking_number
//! 4       6     timestamp (nanoseconds since midnight, 48-bit)
//! 10      8     order_ref_no
//! 18      1     buy_sell_indicator ('B'/'S')
//! 19      4     shares
//! 23      8     symbol (ASCII, right-padded with spaces)
//! 31      4     price (1/10000 units)
//! 35      8     match_no
//! ```

use byteorder::{BigEndian, ByteOrder};
use tracing::warn;

use crate::error::TradeDecodeError;

/// Payload bytes following a trade tag: 2+2+6+8+1+4+8+4+8
pub const TRADE_PAYLOAD_LEN: usize = 43;

/// Price wire values carry four implied decimal places.
const PRICE_SCALE: f64 = 10_000.0;

const NS_PER_HOUR: u64 = 3_600_000_000_000;
const NS_PER_MINUTE: u64 = 60_000_000_000;
const NS_PER_SECOND: u64 = 1_000_000_000;

/// Decoded trade event
///
/// Transient: produced once per trade message and handed straight to the
/// aggregation layer. `stock_locate`, `tracking_number`, `order_ref_no` and
/// `match_no` are retained for completeness but unused downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub stock_locate: u16,
    pub tracking_number: u16,
    /// Nanoseconds since midnight, zero-extended from the 48-bit wire field
    pub timestamp_ns: u64,
    pub order_ref_no: u64,
    /// `'B'` or `'S'`, not validated beyond decode
    pub buy_sell_indicator: u8,
    pub shares: u32,
    /// Trimmed symbol; `None` when the wire field held non-ASCII bytes
    pub symbol: Option<String>,
    /// Decimal price, up to four fractional digits of original precision
    pub price: f64,
    pub match_no: u64,
}

impl TradeRecord {
    /// Decode a trade payload of exactly [`TRADE_PAYLOAD_LEN`] bytes.
    ///
    /// A non-ASCII symbol field does not abort the message: the record is
    /// kept with a null symbol and the raw bytes go to the diagnostic log.
    pub fn decode(payload: &[u8]) -> Result<Self, TradeDecodeError> {
        if payload.len() != TRADE_PAYLOAD_LEN {
            return Err(TradeDecodeError::BadPayloadLength {
                expected: TRADE_PAYLOAD_LEN,
                got: payload.len(),
            });
        }

        let symbol_bytes = &payload[23..31];
        let symbol = match decode_symbol(symbol_bytes) {
            Some(sym) => Some(sym),
            None => {
                warn!(raw = ?symbol_bytes, "unable to decode symbol field, keeping null symbol");
                None
            }
        };

        Ok(Self {
            stock_locate: BigEndian::read_u16(&payload[0..2]),
            tracking_number: BigEndian::read_u16(&payload[2..4]),
            timestamp_ns: BigEndian::read_u48(&payload[4..10]),
            order_ref_no: BigEndian::read_u64(&payload[10..18]),
            buy_sell_indicator: payload[18],
            shares: BigEndian::read_u32(&payload[19..23]),
            symbol,
            price: f64::from(BigEndian::read_u32(&payload[31..35])) / PRICE_SCALE,
            match_no: BigEndian::read_u64(&payload[35..43]),
        })
    }

    /// Re-encode into the wire layout. Used for fixtures and round-trip
    /// verification; a null symbol encodes as eight spaces.
    pub fn to_bytes(&self) -> [u8; TRADE_PAYLOAD_LEN] {
        let mut buf = [0u8; TRADE_PAYLOAD_LEN];
        BigEndian::write_u16(&mut buf[0..2], self.stock_locate);
        BigEndian::write_u16(&mut buf[2..4], self.tracking_number);
        BigEndian::write_u48(&mut buf[4..10], self.timestamp_ns);
        BigEndian::write_u64(&mut buf[10..18], self.order_ref_no);
        buf[18] = self.buy_sell_indicator;
        BigEndian::write_u32(&mut buf[19..23], self.shares);
        let mut symbol_field = [b' '; 8];
        if let Some(sym) = &self.symbol {
            let bytes = sym.as_bytes();
            symbol_field[..bytes.len()].copy_from_slice(bytes);
        }
        buf[23..31].copy_from_slice(&symbol_field);
        BigEndian::write_u32(&mut buf[31..35], (self.price * PRICE_SCALE).round() as u32);
        BigEndian::write_u64(&mut buf[35..43], self.match_no);
        buf
    }

    /// Hour-of-day bucket key (0-23) derived from the timestamp
    pub fn hour(&self) -> u8 {
        ((self.timestamp_ns / NS_PER_HOUR) % 24) as u8
    }

    /// Wall-clock rendering of the timestamp, zero-padded `HH:MM:SS`
    pub fn timestamp_hms(&self) -> String {
        let hour = (self.timestamp_ns / NS_PER_HOUR) % 24;
        let minute = self.timestamp_ns % NS_PER_HOUR / NS_PER_MINUTE;
        let second = self.timestamp_ns % NS_PER_MINUTE / NS_PER_SECOND;
        format!("{hour:02}:{minute:02}:{second:02}")
    }
}

fn decode_symbol(field: &[u8]) -> Option<String> {
    if !field.is_ascii() {
        return None;
    }
    let trimmed = std::str::from_utf8(field).ok()?.trim_end_matches(' ');
    Some(trimmed.to_string())
}
