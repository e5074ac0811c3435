use hycc_ir::ast::Type;
use hycc_ir::TokenList;
use hycc_lexer::tokenize;
use hycc_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

use crate::{Parser, SyntaxError};

fn lex(source: &str) -> TokenList {
    tokenize(&SourceBuffer::new(source))
}

fn parse(source: &str) -> Result<Type, SyntaxError> {
    let tokens = lex(source);
    Parser::from(&tokens).parse_type()
}

fn ty(source: &str) -> Type {
    parse(source).unwrap()
}

// === Named types ===

#[test]
fn basic_type() {
    let t = ty("int;");
    assert!(!t.is_const());
    assert!(!t.is_pointer());
    assert!(t.is_regular_type());
    assert_eq!(t.name().unwrap().to_string(), "int");
}

#[test]
fn const_type() {
    let t = ty("const int;");
    assert!(t.is_const());
    assert!(!t.is_pointer());
    assert!(t.is_regular_type());
}

#[test]
fn scoped_type_name() {
    let t = ty("const std::string");
    assert!(t.is_const());
    assert_eq!(t.name().unwrap().to_string(), "std::string");
}

#[test]
fn const_is_not_a_prefix_match() {
    let t = ty("constant");
    assert!(!t.is_const());
    assert_eq!(t.name().unwrap().to_string(), "constant");
}

// === Pointers ===

#[test]
fn pointer_type() {
    let t = ty("* int;");
    assert!(!t.is_const());
    assert!(!t.is_regular_type());
    assert!(t.is_pointer());
    assert!(t.pointee().unwrap().is_regular_type());
}

#[test]
fn const_pointer_type() {
    let t = ty("const*int;");
    assert!(t.is_const());
    assert!(t.is_pointer());
    assert!(t.pointee().unwrap().is_regular_type());
    assert!(!t.pointee().unwrap().is_const());
}

#[test]
fn pointer_to_pointer() {
    let t = ty("**int;");
    assert!(t.is_pointer());
    assert!(!t.is_const());

    let inner = t.pointee().unwrap();
    assert!(inner.is_pointer());
    assert!(!inner.is_const());

    let innermost = inner.pointee().unwrap();
    assert!(innermost.is_regular_type());
    assert!(!innermost.is_const());
    assert_eq!(t.pointer_depth(), 2);
}

#[test]
fn pointer_to_const_pointer() {
    let t = ty("* const * const int;");
    assert!(!t.is_const());
    assert!(t.is_pointer());

    let inner = t.pointee().unwrap();
    assert!(inner.is_pointer());
    assert!(inner.is_const());

    let innermost = inner.pointee().unwrap();
    assert!(innermost.is_regular_type());
    assert!(innermost.is_const());
    assert_eq!(t.to_string(), "*const *const int");
}

#[test]
fn deep_pointer_chain() {
    let source = format!("{}T", "*".repeat(1000));
    let t = ty(&source);
    assert_eq!(t.pointer_depth(), 1000);
}

#[test]
fn very_long_pointer_chain_parses_and_drops() {
    let source = format!("{}T", "*".repeat(200_000));
    let t = ty(&source);
    assert_eq!(t.pointer_depth(), 200_000);
    drop(t);
}

// === Errors ===

#[test]
fn pointer_without_pointee() {
    let err = parse("**;").unwrap_err();
    assert_eq!(err.to_string(), "syntax error at [1:3]: ;");
}

#[test]
fn missing_type() {
    assert_eq!(parse("const").unwrap_err(), SyntaxError::EndOfInput);
    assert_eq!(parse("").unwrap_err(), SyntaxError::EndOfInput);
}

#[test]
fn failure_restores_cursor() {
    let tokens = lex("const * * 1");
    let mut parser = Parser::from(&tokens);
    let err = parser.parse_type().unwrap_err();
    assert_eq!(err.position().unwrap().column, 11);
    assert_eq!(parser.position(), 0);
}
