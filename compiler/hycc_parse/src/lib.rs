//! Parser for hycc.
//!
//! [`Parser`] is a cursor over a token slice with two primitives:
//! [`Parser::match_and_consume`] matches a sequence of [`TokenPattern`]s at
//! the cursor, and [`Parser::consume_until`] collects tokens up to a
//! terminator. Grammar rules are built on those and return
//! `Result<Node, SyntaxError>`:
//!
//! - [`Parser::parse_qualified_ident`]
//! - [`Parser::parse_type`]
//! - [`Parser::parse_function_arguments`]
//! - [`Parser::parse_global_scope`] / [`Parser::parse_nested_scope`]
//!
//! Parsing stops at the first error. A rule that fails leaves the cursor
//! where it started.

mod error;
mod grammar;
mod parser;
mod pattern;
mod stack;

pub use error::SyntaxError;
pub use parser::{Matched, Parser, Snapshot};
pub use pattern::{TokenPattern, WhitespacePolicy};
