//! The tokenizer's scanning patterns.
//!
//! Order matters: the engine activates the first pattern that accepts the
//! current byte. Comments come before operators because `/` is an operator
//! byte; the catch-all error pattern comes last.

mod comment;
mod literal;
mod operator;
mod run;

use hycc_ir::TokenKind;
use hycc_lexer_core::{CharClass, Matcher, Pattern};

use crate::scanner::Scanner;

use comment::{BlockComment, LineComment};
use literal::Literal;
use operator::Operator;
use run::{Identifier, Run, Single};

/// Number of scanning patterns.
pub(crate) const PATTERN_COUNT: usize = 9;

pub(crate) enum ScanPattern {
    BlockComment(BlockComment),
    LineComment(LineComment),
    Whitespace(Run),
    Integer(Run),
    Literal(Literal),
    SemanticScope(Single),
    Operator(Operator),
    Identifier(Identifier),
    Error(Single),
}

/// Forward one hook call to the wrapped pattern.
macro_rules! dispatch {
    ($self:ident, $p:ident => $call:expr) => {
        match $self {
            ScanPattern::BlockComment($p) => $call,
            ScanPattern::LineComment($p) => $call,
            ScanPattern::Whitespace($p) | ScanPattern::Integer($p) => $call,
            ScanPattern::Literal($p) => $call,
            ScanPattern::SemanticScope($p) | ScanPattern::Error($p) => $call,
            ScanPattern::Operator($p) => $call,
            ScanPattern::Identifier($p) => $call,
        }
    };
}

impl Pattern<Scanner> for ScanPattern {
    fn predicate(&mut self, state: &Scanner) -> bool {
        dispatch!(self, p => p.predicate(state))
    }

    fn begin(&mut self, state: &mut Scanner) {
        dispatch!(self, p => p.begin(state));
    }

    fn continuation(&mut self, state: &mut Scanner) {
        dispatch!(self, p => p.continuation(state));
    }

    fn end(&mut self, state: &mut Scanner) {
        dispatch!(self, p => p.end(state));
    }
}

/// A fresh matcher with every pattern in priority order.
pub(crate) fn matcher() -> Matcher<ScanPattern, PATTERN_COUNT> {
    Matcher::new([
        ScanPattern::BlockComment(BlockComment::default()),
        ScanPattern::LineComment(LineComment::default()),
        ScanPattern::Whitespace(Run::new(CharClass::Whitespace, TokenKind::Whitespace)),
        ScanPattern::Integer(Run::new(CharClass::Digit, TokenKind::Integer)),
        ScanPattern::Literal(Literal::default()),
        ScanPattern::SemanticScope(Single::new(
            Some(CharClass::SemanticScope),
            TokenKind::SemanticScopeOperator,
        )),
        ScanPattern::Operator(Operator::default()),
        ScanPattern::Identifier(Identifier::default()),
        ScanPattern::Error(Single::new(None, TokenKind::Error)),
    ])
}
