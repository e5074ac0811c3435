//! Shared data types of the hycc front end.
//!
//! - [`Span`] and [`Position`]: where something is in the source.
//! - [`Token`], [`TokenKind`], [`TokenList`]: tokenizer output.
//! - [`ast`]: syntax tree nodes built by the parser.

pub mod ast;
mod span;
mod token;

pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenList};

// Re-exported so downstream crates can build tokens without a direct dependency.
pub use hycc_lexer_core::SourceBuffer;
