//! Comments. Both kinds are skipped: they emit no token.

use hycc_lexer_core::Pattern;

use crate::scanner::Scanner;

/// `/* ... */`, or to the end of input when unterminated.
///
/// The closer is searched for after the opener, so `/*/` does not close.
#[derive(Default)]
pub(crate) struct BlockComment {
    /// First offset past the comment while active.
    until: Option<u32>,
}

impl Pattern<Scanner> for BlockComment {
    fn predicate(&mut self, state: &Scanner) -> bool {
        match self.until {
            Some(until) => state.pos() < until,
            None => state.starts_with(b"/*"),
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        let until = state
            .source()
            .find_seq(state.pos() + 2, b"*/")
            .map_or(state.len(), |close| close + 2);
        self.until = Some(until);
    }

    fn continuation(&mut self, _: &mut Scanner) {}

    fn end(&mut self, _: &mut Scanner) {
        self.until = None;
    }
}

/// `// ...` up to, not including, the next line feed.
///
/// Leaving the line feed out makes it an ordinary whitespace token.
#[derive(Default)]
pub(crate) struct LineComment {
    until: Option<u32>,
}

impl Pattern<Scanner> for LineComment {
    fn predicate(&mut self, state: &Scanner) -> bool {
        match self.until {
            Some(until) => state.pos() < until,
            None => state.starts_with(b"//"),
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        let until = state
            .source()
            .find_byte(state.pos(), b'\n')
            .unwrap_or(state.len());
        self.until = Some(until);
    }

    fn continuation(&mut self, _: &mut Scanner) {}

    fn end(&mut self, _: &mut Scanner) {
        self.until = None;
    }
}
