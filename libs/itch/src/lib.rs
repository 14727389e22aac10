//! # ITCH Message Framing and Trade Decoding
//!
//! ## Purpose
//!
//! Byte-exact framing and decoding layer for a NASDAQ ITCH 5.0-style feed:
//! a stream of concatenated variable-length binary messages, each starting
//! with a one-byte ASCII type tag. Only the trade message (`P`) is decoded
//! semantically; every other recognized tag is accounted for by its fixed
//! payload length so the cursor stays aligned with the stream.
//!
//! ## Architecture Role
//!
//! ```text
//! Input Stream → [ByteCursor] → [MessageType table] → [TradeRecord decode]
//!       ↑             ↓                 ↓                     ↓
//!   Raw Binary    Exact Reads      Skip Lengths         Typed Records
//! ```
//!
//! The crate contains no I/O policy beyond the forward-only cursor contract:
//! callers own the driver loop, aggregation, and output.

pub mod cursor;
pub mod error;
pub mod message_type;
pub mod trade;

pub use cursor::ByteCursor;
pub use error::{ParseError, ParseResult, TradeDecodeError};
pub use message_type::MessageType;
pub use trade::{TradeRecord, TRADE_PAYLOAD_LEN};
