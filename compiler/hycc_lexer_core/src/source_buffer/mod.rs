//! Shared, sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! followed by zero padding up to the next 64-byte boundary (with at least
//! two padding bytes). Scanners can therefore look at the current byte and
//! the one after it without checking for the end of input first.
//!
//! The bytes sit behind an [`Arc`]. Cloning a [`SourceBuffer`] hands out
//! another share of the same allocation; tokens hold such a share, so the
//! text they point into cannot be freed while any token is alive.

use std::fmt;
use std::sync::Arc;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Bytes guaranteed to follow the source content: sentinel plus two lookahead bytes.
const TAIL: usize = 3;

/// Shared, immutable, sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone)]
pub struct SourceBuffer {
    inner: Arc<Inner>,
}

struct Inner {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Box<[u8]>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer from UTF-8 source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw 8-bit code units.
    ///
    /// The bytes do not need to be valid UTF-8: classification is per byte
    /// and anything unexpected becomes an error token downstream.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes; offsets throughout the front end are `u32`.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content = &source[..source_len as usize];

        let padded_len = (content.len() + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len].into_boxed_slice();
        buf[..content.len()].copy_from_slice(content);

        Self {
            inner: Arc::new(Inner { buf, source_len }),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner.buf[..self.inner.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.inner.buf
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.inner.source_len
    }

    /// Returns `true` if the source content is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.source_len == 0
    }

    /// Byte at `pos`, or `0x00` at and just past the end of the content.
    ///
    /// # Contract
    ///
    /// `pos <= len() + 2`. The sentinel and padding make those reads valid.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        debug_assert!(
            pos as usize <= self.inner.source_len as usize + 2,
            "byte_at({pos}) reads past the lookahead padding"
        );
        self.inner.buf[pos as usize]
    }

    /// Source bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= len()`.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.inner.source_len,
            "slice end {end} exceeds source length {}",
            self.inner.source_len
        );
        &self.inner.buf[start as usize..end as usize]
    }

    /// Returns `true` if the content starting at `pos` begins with `needle`.
    ///
    /// Never matches across the end of the content.
    pub fn starts_with_at(&self, pos: u32, needle: &[u8]) -> bool {
        self.as_bytes()
            .get(pos as usize..)
            .is_some_and(|rest| rest.starts_with(needle))
    }

    /// Offset of the first `byte` at or after `from`, within the content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    pub fn find_byte(&self, from: u32, byte: u8) -> Option<u32> {
        let rest = self.as_bytes().get(from as usize..)?;
        memchr::memchr(byte, rest).map(|offset| from + offset as u32)
    }

    /// Offset of the first occurrence of `needle` at or after `from`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, which fits in u32"
    )]
    pub fn find_seq(&self, from: u32, needle: &[u8]) -> Option<u32> {
        let rest = self.as_bytes().get(from as usize..)?;
        memchr::memmem::find(rest, needle).map(|offset| from + offset as u32)
    }

    /// Number of live shares of this buffer (this handle included).
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Returns `true` if both handles share the same allocation.
    pub fn same_buffer(&self, other: &SourceBuffer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("len", &self.inner.source_len)
            .field("shares", &self.share_count())
            .finish()
    }
}
