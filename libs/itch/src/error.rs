//! Framing and decode error taxonomy
//!
//! Two tiers with different continuation policies: `ParseError` means the
//! cursor position can no longer be trusted and the run must stop;
//! `TradeDecodeError` covers a single malformed trade whose bytes were
//! already consumed, so the caller may log it and keep reading.

use thiserror::Error;

/// Fatal framing errors. The stream cannot safely continue past any of these.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Stream ended mid-record: fewer bytes were available than the frame
    /// requires. Clean end of stream at a tag boundary is *not* an error
    /// (see [`ByteCursor::read_tag`](crate::ByteCursor::read_tag)).
    #[error("truncated stream: need {need} bytes, got {got}")]
    TruncatedStream { need: usize, got: usize },

    /// Unrecognized message tag. The length table has no entry for it, so
    /// the payload length is unknown and the cursor cannot stay aligned.
    #[error("unknown message type: {0:#04x}")]
    UnknownMessageType(u8),

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for framing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Recoverable per-message decode failures. The offending message's payload
/// has been fully consumed, so stream alignment is preserved.
#[derive(Debug, Error)]
pub enum TradeDecodeError {
    #[error("trade payload has {got} bytes, expected {expected}")]
    BadPayloadLength { expected: usize, got: usize },
}
