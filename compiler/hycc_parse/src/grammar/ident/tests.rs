use hycc_ir::ast::{IdentUnit, QualifiedIdent};
use hycc_ir::TokenList;
use hycc_lexer::tokenize;
use hycc_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use crate::{Parser, SyntaxError};

fn lex(source: &str) -> TokenList {
    tokenize(&SourceBuffer::new(source))
}

/// Parse an identifier and report whether the input was fully consumed.
fn parse(source: &str) -> (Result<QualifiedIdent, SyntaxError>, bool) {
    let tokens = lex(source);
    let mut parser = Parser::from(&tokens);
    let result = parser.parse_qualified_ident();
    (result, parser.all_parsed())
}

fn ident(source: &str) -> QualifiedIdent {
    parse(source).0.unwrap()
}

// === Matching ===

#[test]
fn single_name() {
    let tokens = lex("abc;");
    let mut parser = Parser::from(&tokens);
    let id = parser.parse_qualified_ident().unwrap();
    assert_eq!(id.to_string(), "abc");
    assert_eq!(id.len(), 1);
    assert!(!parser.all_parsed());
}

#[test]
fn scoped_name() {
    let id = ident("a::b::c;");
    assert_eq!(id.to_string(), "a::b::c");
    assert_eq!(id.len(), 5);
}

#[test]
fn leading_scope_resolution() {
    let id = ident("::global");
    assert!(matches!(id.units()[0], IdentUnit::ScopeResolution));
    assert_eq!(id.to_string(), "::global");
}

#[test]
fn one_leading_whitespace_token_is_skipped() {
    let (result, done) = parse("  \n\tabc");
    assert_eq!(result.unwrap().to_string(), "abc");
    assert!(done);
}

// === Whitespace is significant inside ===

#[test]
fn whitespace_ends_the_identifier() {
    let (ab, ab_done) = parse("ab c");
    let (a, a_done) = parse("a bc");
    let (abc, abc_done) = parse("abc");

    assert!(!ab_done);
    assert!(!a_done);
    assert!(abc_done);
    let (ab, a, abc) = (ab.unwrap(), a.unwrap(), abc.unwrap());
    assert_ne!(ab, a);
    assert_ne!(ab, abc);
    assert_ne!(a, abc);
}

#[test]
fn spaced_scope_resolution_stops() {
    let (result, done) = parse("a :: b");
    assert_eq!(result.unwrap().to_string(), "a");
    assert!(!done);
}

// === `::` versus `:` ===

#[test]
fn only_double_colon_separates() {
    let (result, done) = parse("a::b::c");
    assert_eq!(result.unwrap().to_string(), "a::b::c");
    assert!(done);

    // A single `:` is not part of an identifier.
    let (result, done) = parse("a:b");
    assert_eq!(result.unwrap().to_string(), "a");
    assert!(!done);
}

#[test]
fn trailing_scope_resolution_is_an_error() {
    let (result, _) = parse("a::b:: c");
    assert_eq!(
        result.unwrap_err().to_string(),
        "syntax error at [1:8]: c"
    );

    let (result, _) = parse("a::b:::c;");
    assert_eq!(
        result.unwrap_err().to_string(),
        "syntax error at [1:7]: :"
    );

    let (result, _) = parse("a::");
    assert_eq!(result.unwrap_err(), SyntaxError::EndOfInput);
}

#[test]
fn failure_restores_cursor() {
    let tokens = lex(" a::b:: c");
    let mut parser = Parser::from(&tokens);
    assert!(parser.parse_qualified_ident().is_err());
    assert_eq!(parser.position(), 0);
}

// === Errors ===

#[test]
fn nothing_to_match() {
    let (result, _) = parse("123");
    assert_eq!(result.unwrap_err().to_string(), "syntax error at [1:1]: 123");

    let (result, _) = parse("");
    assert_eq!(result.unwrap_err(), SyntaxError::EndOfInput);

    let (result, _) = parse("   ");
    assert_eq!(result.unwrap_err(), SyntaxError::EndOfInput);
}

// === Equality ===

#[test]
fn equality() {
    let abc = ident("abc");
    let cba = ident("cba");
    let scoped = ident("abc::abc");

    assert_eq!(abc, abc.clone());
    assert_eq!(scoped, ident("abc::abc"));
    assert_ne!(abc, cba);
    assert_ne!(abc, scoped);
    assert_ne!(cba, scoped);
}

#[test]
fn equality_ignores_position() {
    assert_eq!(ident("   abc"), ident("abc"));
    assert_ne!(ident("a::b"), ident("b::a"));
}
