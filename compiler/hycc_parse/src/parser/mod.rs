//! Token cursor with pattern matching primitives.
//!
//! Grammar rules never index tokens directly. They ask the parser whether a
//! sequence of [`TokenPattern`]s matches at the cursor and, if it does, get
//! the matched tokens back with the cursor moved past them. A failed match
//! leaves the cursor where it was.

use hycc_ir::{Token, TokenList};
use smallvec::SmallVec;
use tracing::trace;

use crate::{SyntaxError, TokenPattern, WhitespacePolicy};

/// Tokens returned by a successful match, one per pattern.
pub type Matched<'a> = SmallVec<[&'a Token; 4]>;

/// Saved cursor position, for backtracking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pos: usize,
}

/// Cursor over a token slice.
///
/// Grammar rules are methods on this type (see the `grammar` module).
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser at the start of `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Index of the next unconsumed token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens not consumed yet, whitespace included.
    #[inline]
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos..]
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { pos: self.pos }
    }

    #[inline]
    pub fn restore(&mut self, snapshot: Snapshot) {
        debug_assert!(
            snapshot.pos <= self.tokens.len(),
            "snapshot position {} out of bounds (max {})",
            snapshot.pos,
            self.tokens.len()
        );
        self.pos = snapshot.pos;
    }

    /// Only whitespace (or nothing) is left.
    pub fn all_parsed(&self) -> bool {
        self.next_significant().is_none()
    }

    /// Next unconsumed token that is not whitespace.
    pub fn next_significant(&self) -> Option<&'a Token> {
        self.remaining().iter().find(|t| !t.kind.is_whitespace())
    }

    /// Match `patterns` against consecutive tokens, skipping whitespace.
    ///
    /// See [`Parser::match_and_consume_with`].
    #[inline]
    pub fn match_and_consume(&mut self, patterns: &[TokenPattern<'_>]) -> Option<Matched<'a>> {
        self.match_and_consume_with(patterns, WhitespacePolicy::Skip)
    }

    /// Match `patterns` against consecutive tokens at the cursor.
    ///
    /// On success the cursor moves past the last matched token and the
    /// matched tokens are returned, one per pattern. With
    /// [`WhitespacePolicy::Skip`] whitespace before and between them is
    /// consumed too but not returned. On failure nothing is consumed.
    ///
    /// An empty pattern list always matches and consumes nothing.
    pub fn match_and_consume_with(
        &mut self,
        patterns: &[TokenPattern<'_>],
        policy: WhitespacePolicy,
    ) -> Option<Matched<'a>> {
        let (matched, end) = self.match_at(patterns, policy)?;
        self.advance_to(end);
        Some(matched)
    }

    /// Would `patterns` match here (skipping whitespace)? Consumes nothing.
    pub fn peek_matches(&self, patterns: &[TokenPattern<'_>]) -> bool {
        self.match_at(patterns, WhitespacePolicy::Skip).is_some()
    }

    /// Collect tokens up to `terminator`, skipping whitespace.
    ///
    /// See [`Parser::consume_until_with`].
    #[inline]
    pub fn consume_until(&mut self, terminator: TokenPattern<'_>) -> Option<Vec<&'a Token>> {
        self.consume_until_with(terminator, WhitespacePolicy::Skip)
    }

    /// Collect tokens up to the first one matching `terminator`.
    ///
    /// The terminator is consumed but not returned. Skipped whitespace is
    /// neither returned nor able to act as the terminator. If no token
    /// matches, nothing is consumed and `None` is returned.
    pub fn consume_until_with(
        &mut self,
        terminator: TokenPattern<'_>,
        policy: WhitespacePolicy,
    ) -> Option<Vec<&'a Token>> {
        let mut collected = Vec::new();
        for (offset, token) in self.remaining().iter().enumerate() {
            if policy.skips(token) {
                continue;
            }
            if terminator.matches(token) {
                self.advance_to(self.pos + offset + 1);
                return Some(collected);
            }
            collected.push(token);
        }
        None
    }

    /// Error for the next significant token, or end of input.
    pub fn syntax_error(&self) -> SyntaxError {
        self.next_significant()
            .map_or(SyntaxError::EndOfInput, SyntaxError::unexpected)
    }

    /// Run `rule`; if it fails, put the cursor back where it started.
    ///
    /// The error is built by `rule` before the rollback, so it still points
    /// at the offending token.
    pub(crate) fn with_rollback<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let start = self.snapshot();
        let result = rule(self);
        if result.is_err() {
            self.restore(start);
        }
        result
    }

    fn match_at(
        &self,
        patterns: &[TokenPattern<'_>],
        policy: WhitespacePolicy,
    ) -> Option<(Matched<'a>, usize)> {
        let mut matched = Matched::new();
        let mut idx = self.pos;
        for pattern in patterns {
            while self.tokens.get(idx).is_some_and(|t| policy.skips(t)) {
                idx += 1;
            }
            let token = self.tokens.get(idx)?;
            if !pattern.matches(token) {
                return None;
            }
            matched.push(token);
            idx += 1;
        }
        Some((matched, idx))
    }

    fn advance_to(&mut self, end: usize) {
        for token in &self.tokens[self.pos..end] {
            trace!(
                kind = %token.kind,
                row = token.row(),
                column = token.column(),
                "advance"
            );
        }
        self.pos = end;
    }
}

impl<'a> From<&'a TokenList> for Parser<'a> {
    fn from(tokens: &'a TokenList) -> Self {
        Parser::new(tokens.as_slice())
    }
}
