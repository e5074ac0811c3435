//! Grammar rules.
//!
//! Each rule is a `Parser` method returning `Result<Node, SyntaxError>`.
//! A rule that fails leaves the cursor where it found it.
//!
//! # Module Structure
//!
//! - `ident`: qualified identifiers (`a::b`)
//! - `ty`: types (`const * T`)
//! - `args`: argument lists (`inout a: T, b)`)
//! - `scope`: global and nested block scopes

mod args;
mod ident;
mod scope;
mod ty;

use hycc_ir::TokenKind;

use crate::TokenPattern;

const fn punct(text: &'static str) -> TokenPattern<'static> {
    TokenPattern::exact(TokenKind::SemanticScopeOperator, text)
}

const fn keyword(text: &'static str) -> TokenPattern<'static> {
    TokenPattern::exact(TokenKind::Identifier, text)
}

// === Patterns ===

const WHITESPACE: [TokenPattern<'static>; 1] = [TokenPattern::kind(TokenKind::Whitespace)];
const IDENTIFIER: [TokenPattern<'static>; 1] = [TokenPattern::kind(TokenKind::Identifier)];
/// `::` is two adjacent `:` tokens.
const SCOPE_RESOLUTION: [TokenPattern<'static>; 2] = [punct(":"), punct(":")];

const CONST_QUALIFIER: [TokenPattern<'static>; 1] = [keyword("const")];
const POINTER: [TokenPattern<'static>; 1] = [TokenPattern::exact(TokenKind::Operator, "*")];

const TYPE_SEPARATOR: [TokenPattern<'static>; 1] = [punct(":")];
const ARGUMENT_SEPARATOR: [TokenPattern<'static>; 1] = [punct(",")];
const ARGUMENTS_END: [TokenPattern<'static>; 1] = [punct(")")];

const SCOPE_OPEN: [TokenPattern<'static>; 1] = [punct("{")];
const SCOPE_CLOSE: [TokenPattern<'static>; 1] = [punct("}")];
