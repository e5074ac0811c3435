//! Syntax tree nodes.
//!
//! Nodes are plain owned values built top-down by the grammar rules and never
//! changed afterwards. Leaves hold [`Token`](crate::Token)s, so a tree keeps
//! its source buffer alive.
//!
//! # Module Structure
//!
//! - `ident`: qualified identifiers (`a::b`)
//! - `ty`: types, including pointers and `const`
//! - `args`: function argument lists and passing modes
//! - `scope`: block scopes

mod args;
mod ident;
mod scope;
mod ty;

pub use args::{FunctionArgument, FunctionArguments, PassingMode};
pub use ident::{IdentUnit, QualifiedIdent};
pub use scope::{Scope, ScopeEntry};
pub use ty::{Type, TypeKind};
