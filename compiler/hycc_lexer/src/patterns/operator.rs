//! Maximal-munch operators.

use hycc_ir::TokenKind;
use hycc_lexer_core::{CharClass, Pattern};

use crate::operator::is_cataloged;
use crate::scanner::Scanner;

/// Any operator byte starts a token; it grows one byte at a time while the
/// grown lexeme is in the catalog.
#[derive(Default)]
pub(crate) struct Operator {
    active: bool,
    /// Whether the next byte may join the lexeme.
    extends: bool,
}

impl Operator {
    fn check_extension(&mut self, state: &Scanner) {
        self.extends = state.lexeme_with_next().is_some_and(is_cataloged);
    }
}

impl Pattern<Scanner> for Operator {
    fn predicate(&mut self, state: &Scanner) -> bool {
        if self.active {
            self.extends
        } else {
            state.current_class() == CharClass::OperatorUnit
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        self.active = true;
        state.set_cache();
        self.check_extension(state);
    }

    fn continuation(&mut self, state: &mut Scanner) {
        self.check_extension(state);
    }

    fn end(&mut self, state: &mut Scanner) {
        state.emit(TokenKind::Operator);
        *self = Self::default();
    }
}
