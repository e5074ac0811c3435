//! Type parsing.
//!
//! ```text
//! type := "const"? ( "*" type | qualified_ident )
//! ```
//!
//! Whitespace between the qualifier, the `*` and the pointee is free.

use hycc_ir::ast::Type;
use tracing::debug;

use super::{CONST_QUALIFIER, POINTER};
use crate::stack::ensure_sufficient_stack;
use crate::{Parser, SyntaxError};

impl Parser<'_> {
    /// Parse a type expression.
    ///
    /// `const` binds to the level it precedes: in `* const * const int` the
    /// outer pointer is mutable and both levels below it are const.
    pub fn parse_type(&mut self) -> Result<Type, SyntaxError> {
        debug!(pos = self.position(), "parse_type");
        self.with_rollback(|p| {
            let is_const = p.match_and_consume(&CONST_QUALIFIER).is_some();

            if p.match_and_consume(&POINTER).is_some() {
                let pointee = ensure_sufficient_stack(|| p.parse_type())?;
                return Ok(Type::pointer(is_const, pointee));
            }

            let name = p.parse_qualified_ident()?;
            Ok(Type::named(is_const, name))
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
