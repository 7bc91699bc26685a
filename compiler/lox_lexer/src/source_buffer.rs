//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees `0x00` bytes after the source content, so the
//! scanner's two-byte lookahead ([`Cursor::current`] and [`Cursor::peek`])
//! never needs a bounds check and reads `0x00` past the end, the same
//! answer a `'\0'`-returning `peek()` gives at end of input.
//!
//! A `0x00` byte *inside* the source is not EOF. [`Cursor::is_eof`]
//! tells the two apart by position.

use crate::Cursor;

/// Zero bytes kept after the source: the sentinel plus one byte so
/// `peek()` on the last source byte stays in bounds.
const PADDING: usize = 2;

/// Owned copy of the source with trailing zero padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source text followed by `PADDING` NUL characters.
    buf: String,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// # Panics
    ///
    /// If the source is larger than `u32::MAX` bytes. Positions are
    /// stored as `u32` throughout the token model.
    pub fn new(source: &str) -> Self {
        let source_len = u32::try_from(source.len())
            .unwrap_or_else(|_| panic!("source exceeds {} bytes", u32::MAX));

        let mut buf = String::with_capacity(source.len() + PADDING);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(PADDING));

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        // `source_len` is the end of the original text, a char boundary.
        &self.buf[..self.source_len as usize]
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// A cursor positioned at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.buf.as_bytes(), self.as_str(), self.source_len)
    }
}

#[cfg(test)]
mod tests;
