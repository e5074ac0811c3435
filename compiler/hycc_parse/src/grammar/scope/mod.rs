//! Block scopes.
//!
//! ```text
//! global := entry* EOF
//! nested := entry* "}"
//! entry  := "{" nested
//! ```
//!
//! A nested scope starts after its `{`; the caller consumes it.

use hycc_ir::ast::{Scope, ScopeEntry};
use tracing::debug;

use super::{SCOPE_CLOSE, SCOPE_OPEN};
use crate::stack::ensure_sufficient_stack;
use crate::{Parser, SyntaxError};

impl Parser<'_> {
    /// Parse the whole remaining input as the global scope.
    ///
    /// A stray `}` is an error here; the global scope ends only at end of
    /// input.
    pub fn parse_global_scope(&mut self) -> Result<Scope, SyntaxError> {
        debug!(pos = self.position(), "parse_global_scope");
        self.with_rollback(|p| {
            let mut entries = Vec::new();
            while !p.all_parsed() {
                if p.match_and_consume(&SCOPE_OPEN).is_some() {
                    entries.push(p.parse_scope_entry()?);
                } else {
                    return Err(p.syntax_error());
                }
            }
            Ok(Scope::global(entries))
        })
    }

    /// Parse a scope body after its `{`, up to and including the `}`.
    pub fn parse_nested_scope(&mut self) -> Result<Scope, SyntaxError> {
        self.with_rollback(|p| {
            let mut entries = Vec::new();
            loop {
                if p.match_and_consume(&SCOPE_CLOSE).is_some() {
                    return Ok(Scope::nested(entries));
                }
                if p.match_and_consume(&SCOPE_OPEN).is_some() {
                    entries.push(p.parse_scope_entry()?);
                } else {
                    // End of input before the closing `}` lands here too.
                    return Err(p.syntax_error());
                }
            }
        })
    }

    fn parse_scope_entry(&mut self) -> Result<ScopeEntry, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_nested_scope()).map(ScopeEntry::Nested)
    }
}
