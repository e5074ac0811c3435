//! Source locations: byte spans and row/column positions.

use std::fmt;

/// Byte range `start..end` into a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Row and column of a token's first byte. Both start at 1.
///
/// Columns count bytes, not characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of a source.
    pub const START: Position = Position { row: 1, column: 1 };

    #[inline]
    pub const fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }

    /// Position after stepping over `byte`.
    #[inline]
    #[must_use]
    pub const fn step(self, byte: u8) -> Self {
        if byte == b'\n' {
            Position {
                row: self.row + 1,
                column: 1,
            }
        } else {
            Position {
                row: self.row,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
