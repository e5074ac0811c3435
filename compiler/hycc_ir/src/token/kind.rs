//! Token kinds.

use std::fmt;

/// Kind of a scanned token.
///
/// The tokenizer does not distinguish keywords from identifiers; grammar
/// rules match keywords by text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Run of whitespace bytes.
    Whitespace,
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// Run of decimal digits.
    Integer,
    /// Delimited literal, delimiters included.
    Literal,
    /// One of `( ) , . : ; [ ] { }`.
    SemanticScopeOperator,
    /// Maximal-munch operator lexeme.
    Operator,
    /// A byte no other rule accepts.
    Error,
}

impl TokenKind {
    /// Stable lowercase name used in diagnostics and logs.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Literal => "literal",
            TokenKind::SemanticScopeOperator => "semantic_scope_operator",
            TokenKind::Operator => "operator",
            TokenKind::Error => "error",
        }
    }

    #[inline]
    pub const fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
