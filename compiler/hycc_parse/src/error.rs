//! Syntax errors.

use hycc_ir::{Position, Token, TokenKind};
use thiserror::Error;

/// Why a grammar rule rejected its input.
///
/// There is no recovery: the first error aborts the parse. The reported
/// token is the first non-whitespace token at or after the cursor; input
/// with only whitespace left reports [`SyntaxError::EndOfInput`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The parser stopped at a token no rule accepts here.
    #[error("syntax error at [{position}]: {text}")]
    UnexpectedToken {
        position: Position,
        kind: TokenKind,
        text: String,
    },
    /// Input ended while a rule still needed tokens.
    #[error("syntax error at end of file")]
    EndOfInput,
}

impl SyntaxError {
    /// Error pointing at `token`.
    pub fn unexpected(token: &Token) -> Self {
        SyntaxError::UnexpectedToken {
            position: token.position,
            kind: token.kind,
            text: token.text().into_owned(),
        }
    }

    /// Where the error happened, if not at the end of input.
    pub fn position(&self) -> Option<Position> {
        match self {
            SyntaxError::UnexpectedToken { position, .. } => Some(*position),
            SyntaxError::EndOfInput => None,
        }
    }
}
