//! Tokens produced by the tokenizer.
//!
//! A token is a classified byte range of a [`SourceBuffer`] plus the row and
//! column where it starts. Each token holds its own share of the buffer, so
//! token text stays readable for as long as the token exists, independent of
//! the original buffer handle.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::borrow::Cow;
use std::fmt;

use hycc_lexer_core::SourceBuffer;

use crate::{Position, Span};

/// A token with its location in the source.
#[derive(Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub position: Position,
    source: SourceBuffer,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, position: Position, source: SourceBuffer) -> Self {
        debug_assert!(
            span.end <= source.len(),
            "token span {span} exceeds source length {}",
            source.len()
        );
        Token {
            kind,
            span,
            position,
            source,
        }
    }

    /// The token's bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.source.slice(self.span.start, self.span.end)
    }

    /// The token's text. Invalid UTF-8 is replaced with U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Does the token consist of exactly `text`?
    #[inline]
    pub fn is_text(&self, text: &str) -> bool {
        self.bytes() == text.as_bytes()
    }

    /// 1-based row of the first byte.
    #[inline]
    pub fn row(&self) -> u32 {
        self.position.row
    }

    /// 1-based column of the first byte.
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The buffer this token points into.
    #[inline]
    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }
}

// Tokens are equal when they are the same range of the same buffer.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.span == other.span
            && self.position == other.position
            && self.source.same_buffer(&other.source)
    }
}

impl Eq for Token {}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {} ({})",
            self.kind,
            self.text(),
            self.position,
            self.span
        )
    }
}
