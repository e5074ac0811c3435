//! Delimited literals: `"..."`, `'...'`, `` `...` ``.

use hycc_ir::TokenKind;
use hycc_lexer_core::{Advance, CharClass, Pattern};

use crate::scanner::Scanner;

/// Opens on a delimiter and closes on the same delimiter, inclusive.
///
/// A backslash takes the following byte along, so an escaped delimiter does
/// not close the literal. Unterminated literals run to the end of input.
#[derive(Default)]
pub(crate) struct Literal {
    delimiter: Option<u8>,
    closed: bool,
}

impl Pattern<Scanner> for Literal {
    fn predicate(&mut self, state: &Scanner) -> bool {
        if self.closed {
            return false;
        }
        match self.delimiter {
            Some(delimiter) => {
                self.closed = state.current() == delimiter;
                true
            }
            None => state.current_class() == CharClass::LiteralDelimiter,
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        self.delimiter = Some(state.current());
        state.set_cache();
    }

    fn continuation(&mut self, state: &mut Scanner) {
        if state.current() == b'\\' && state.pos() + 1 < state.len() {
            state.advance();
        }
    }

    fn end(&mut self, state: &mut Scanner) {
        state.emit(TokenKind::Literal);
        *self = Self::default();
    }
}
