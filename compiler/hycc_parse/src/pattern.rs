//! Token patterns: what a grammar rule expects to see next.

use hycc_ir::{Token, TokenKind};

/// Matches a single token, by kind or by kind and exact text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenPattern<'p> {
    /// Any token of this kind.
    Kind(TokenKind),
    /// A token of this kind whose bytes equal the text.
    Exact(TokenKind, &'p str),
}

impl<'p> TokenPattern<'p> {
    #[inline]
    pub const fn kind(kind: TokenKind) -> Self {
        TokenPattern::Kind(kind)
    }

    #[inline]
    pub const fn exact(kind: TokenKind, text: &'p str) -> Self {
        TokenPattern::Exact(kind, text)
    }

    /// Does `token` satisfy this pattern?
    pub fn matches(&self, token: &Token) -> bool {
        match *self {
            TokenPattern::Kind(kind) => token.kind == kind,
            TokenPattern::Exact(kind, text) => token.kind == kind && token.is_text(text),
        }
    }
}

impl From<TokenKind> for TokenPattern<'_> {
    fn from(kind: TokenKind) -> Self {
        TokenPattern::Kind(kind)
    }
}

/// Whether whitespace tokens take part in matching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Whitespace before and between matched tokens is passed over.
    #[default]
    Skip,
    /// Whitespace tokens must be matched like any other token.
    Significant,
}

impl WhitespacePolicy {
    #[inline]
    pub(crate) fn skips(self, token: &Token) -> bool {
        self == WhitespacePolicy::Skip && token.kind.is_whitespace()
    }
}
