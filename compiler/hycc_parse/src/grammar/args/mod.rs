//! Function argument lists.
//!
//! ```text
//! arguments := ( argument ( "," argument )* )? ")"
//! argument  := mode? identifier? ( ":" type )?
//! mode      := "in" | "inout" | "out" | "move" | "copy" | "forward"
//! ```
//!
//! The opening `(` belongs to the caller; the closing `)` is consumed here.

use hycc_ir::ast::{FunctionArgument, FunctionArguments, PassingMode};
use tracing::{debug, trace};

use super::{keyword, ARGUMENTS_END, ARGUMENT_SEPARATOR, IDENTIFIER, TYPE_SEPARATOR};
use crate::{Parser, SyntaxError};

impl Parser<'_> {
    /// Parse arguments up to and including the closing `)`.
    ///
    /// An argument without a name is accepted and dropped. A `,` directly
    /// before `)` is an error reported at the `)`.
    pub fn parse_function_arguments(&mut self) -> Result<FunctionArguments, SyntaxError> {
        debug!(pos = self.position(), "parse_function_arguments");
        self.with_rollback(|p| {
            let mut args = Vec::new();
            loop {
                let mode = p.parse_passing_mode();
                let name = p
                    .match_and_consume(&IDENTIFIER)
                    .map(|matched| matched[0].clone());
                let ty = match p.match_and_consume(&TYPE_SEPARATOR) {
                    Some(_) => Some(p.parse_type()?),
                    None => None,
                };

                match name {
                    Some(name) => args.push(FunctionArgument { mode, name, ty }),
                    None => trace!("unnamed argument dropped"),
                }

                if p.match_and_consume(&ARGUMENT_SEPARATOR).is_some() {
                    if p.peek_matches(&ARGUMENTS_END) {
                        return Err(p.syntax_error());
                    }
                } else if p.match_and_consume(&ARGUMENTS_END).is_some() {
                    break;
                } else {
                    return Err(p.syntax_error());
                }
            }
            Ok(FunctionArguments::new(args))
        })
    }

    /// Consume a passing mode keyword if one is next; `in` otherwise.
    fn parse_passing_mode(&mut self) -> PassingMode {
        PassingMode::ALL
            .into_iter()
            .find(|mode| self.match_and_consume(&[keyword(mode.keyword())]).is_some())
            .unwrap_or_default()
    }
}
