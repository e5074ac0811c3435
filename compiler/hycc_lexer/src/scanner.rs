//! Scanner state threaded through the matching engine.

use hycc_ir::{Position, Span, Token, TokenKind, TokenList};
use hycc_lexer_core::{classify, Advance, CharClass, SourceBuffer};
use tracing::trace;

/// Where the token under construction started.
#[derive(Copy, Clone, Debug)]
struct Cache {
    start: u32,
    position: Position,
}

/// Byte cursor plus the tokens emitted so far.
///
/// `pos` is the byte the active pattern is looking at. When a pattern's
/// `end` hook runs, `pos` has already moved past the token, so the token
/// covers `cache.start..pos`.
pub(crate) struct Scanner {
    source: SourceBuffer,
    pos: u32,
    position: Position,
    cache: Cache,
    tokens: TokenList,
}

impl Scanner {
    pub(crate) fn new(source: &SourceBuffer) -> Self {
        Scanner {
            source: source.clone(),
            pos: 0,
            position: Position::START,
            cache: Cache {
                start: 0,
                position: Position::START,
            },
            tokens: TokenList::new(),
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.source.len()
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte; `0x00` at the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.source.byte_at(self.pos)
    }

    #[inline]
    pub(crate) fn current_class(&self) -> CharClass {
        classify(self.current())
    }

    #[inline]
    pub(crate) fn starts_with(&self, needle: &[u8]) -> bool {
        self.source.starts_with_at(self.pos, needle)
    }

    #[inline]
    pub(crate) fn source(&self) -> &SourceBuffer {
        &self.source
    }

    /// Remember the current byte as the start of a token.
    pub(crate) fn set_cache(&mut self) {
        self.cache = Cache {
            start: self.pos,
            position: self.position,
        };
    }

    /// Bytes from the cached start through the byte after the current one,
    /// or `None` when the current byte is the last.
    pub(crate) fn lexeme_with_next(&self) -> Option<&[u8]> {
        let end = self.pos + 2;
        (end <= self.source.len()).then(|| self.source.slice(self.cache.start, end))
    }

    /// Emit a token covering `cache.start..pos`.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let span = Span::new(self.cache.start, self.pos);
        let token = Token::new(kind, span, self.cache.position, self.source.clone());
        trace!(
            kind = %kind,
            span_start = span.start,
            span_end = span.end,
            row = token.row(),
            column = token.column(),
            "emit"
        );
        self.tokens.push(token);
    }

    pub(crate) fn into_tokens(self) -> TokenList {
        self.tokens
    }
}

impl Advance for Scanner {
    fn advance(&mut self) {
        debug_assert!(!self.at_end(), "scanner advanced past the end of input");
        self.position = self.position.step(self.current());
        self.pos += 1;
    }
}
