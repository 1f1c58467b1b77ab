//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer places a `0x00` sentinel byte after the source content so the
//! scanner can detect EOF by looking at the current byte. The total size is
//! rounded up to the next 64-byte boundary, which also leaves enough zero
//! padding for the one-byte lookahead used by [`Cursor::peek`].

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Largest source, in bytes, that can be scanned to the end.
///
/// Offsets are `u32`; callers reading untrusted input should reject anything
/// longer before building a buffer.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Sentinel-terminated copy of a source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than [`MAX_SOURCE_LEN`] saturate `source_len`;
    /// anything past that point is treated as EOF.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Minimum: source + sentinel + one byte of padding for `peek()`.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Full buffer including sentinel and padding.
    #[cfg(test)]
    pub(crate) fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}
