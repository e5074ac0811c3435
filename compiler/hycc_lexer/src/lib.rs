//! Tokenizer for hycc.
//!
//! [`tokenize`] runs the state-pattern-matching engine from
//! `hycc_lexer_core` over a [`SourceBuffer`] with nine scanning patterns:
//!
//! | Pattern | Emits |
//! |---|---|
//! | block comment `/* */` | nothing |
//! | line comment `//` | nothing |
//! | whitespace run | `Whitespace` |
//! | digit run | `Integer` |
//! | delimited literal with `\` escapes | `Literal` |
//! | one of `( ) , . : ; [ ] { }` | `SemanticScopeOperator` |
//! | maximal-munch operator | `Operator` |
//! | identifier | `Identifier` |
//! | any other byte | `Error` |
//!
//! Tokenizing never fails. Bytes no other pattern accepts become one-byte
//! `Error` tokens and are left for the parser to report.

mod operator;
mod patterns;
mod scanner;

pub use operator::operator_catalog;

use hycc_ir::TokenList;
use hycc_lexer_core::SourceBuffer;
use tracing::debug;

use scanner::Scanner;

/// Split `source` into tokens.
///
/// Every byte outside a comment belongs to exactly one token. Each token
/// holds a share of `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &SourceBuffer) -> TokenList {
    let mut matcher = patterns::matcher();
    let scanner = match matcher.run(Scanner::new(source), Scanner::at_end) {
        Ok(scanner) => scanner,
        // The error pattern accepts every byte.
        Err(err) => unreachable!("tokenizer patterns are not exhaustive: {err}"),
    };
    let tokens = scanner.into_tokens();
    debug!(tokens = tokens.len(), "tokenized");
    tokens
}
