//! Qualified identifier parsing.

use hycc_ir::ast::{IdentUnit, QualifiedIdent};
use tracing::debug;

use super::{IDENTIFIER, SCOPE_RESOLUTION, WHITESPACE};
use crate::{Parser, SyntaxError, WhitespacePolicy};

impl Parser<'_> {
    /// Parse `name`, `a::b`, `::a`, ...
    ///
    /// One leading whitespace token is allowed; after that the units must be
    /// adjacent, so `a :: b` stops after `a`. Fails on no units at all and on
    /// a trailing `::`.
    pub fn parse_qualified_ident(&mut self) -> Result<QualifiedIdent, SyntaxError> {
        debug!(pos = self.position(), "parse_qualified_ident");
        self.with_rollback(|p| {
            p.match_and_consume_with(&WHITESPACE, WhitespacePolicy::Significant);

            let mut units = Vec::new();
            loop {
                if p.match_and_consume_with(&SCOPE_RESOLUTION, WhitespacePolicy::Significant)
                    .is_some()
                {
                    units.push(IdentUnit::ScopeResolution);
                } else if let Some(matched) =
                    p.match_and_consume_with(&IDENTIFIER, WhitespacePolicy::Significant)
                {
                    units.push(IdentUnit::Name(matched[0].clone()));
                } else {
                    break;
                }
            }

            match units.last() {
                Some(IdentUnit::Name(_)) => Ok(QualifiedIdent::new(units)),
                // Nothing matched, or a `::` with no name after it.
                None | Some(IdentUnit::ScopeResolution) => Err(p.syntax_error()),
            }
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
