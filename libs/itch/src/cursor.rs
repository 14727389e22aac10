//! Forward-only byte cursor over the decompressed feed
//!
//! Access is strictly sequential: no seeking, no rewinding. The cursor owns
//! the underlying reader for the lifetime of the run, so the input handle is
//! released on every exit path when the cursor is dropped.

use std::io::Read;

use crate::error::{ParseError, ParseResult};

/// Skip buffer size, comfortably above the largest framed payload (49).
const MAX_PAYLOAD_LEN: usize = 64;

/// Sequential reader with exact-length reads and end-of-stream detection
pub struct ByteCursor<R: Read> {
    inner: R,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the next one-byte message tag.
    ///
    /// Zero bytes available at a tag boundary is the normal termination
    /// signal and yields `Ok(None)`; any other shortfall is an I/O error.
    pub fn read_tag(&mut self) -> ParseResult<Option<u8>> {
        let mut tag = [0u8; 1];
        loop {
            match self.inner.read(&mut tag) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(tag[0])),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ParseError::Io(e)),
            }
        }
    }

    /// Fill `buf` exactly, or fail with [`ParseError::TruncatedStream`] when
    /// the stream ends before `buf.len()` bytes arrive.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> ParseResult<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(ParseError::TruncatedStream {
                        need: buf.len(),
                        got: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ParseError::Io(e)),
            }
        }
        Ok(())
    }

    /// Consume and discard exactly `len` bytes.
    pub fn skip(&mut self, len: usize) -> ParseResult<()> {
        debug_assert!(len <= MAX_PAYLOAD_LEN);
        let mut scratch = [0u8; MAX_PAYLOAD_LEN];
        self.read_exact(&mut scratch[..len])
    }
}
