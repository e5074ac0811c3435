//! Low-level building blocks of the hycc front end.
//!
//! - [`SourceBuffer`]: shared, sentinel-terminated source bytes. Every token
//!   keeps a share, so the bytes live as long as the last token does.
//! - [`CharClass`] / [`classify`]: per-byte lexical classification.
//! - [`matcher`]: the state-pattern-matching engine that drives scanning.
//!
//! This crate has no `hycc_*` dependencies. Tooling that only needs byte
//! classification or the matching engine can depend on it alone.

mod char_class;
pub mod matcher;
mod source_buffer;

pub use char_class::{classify, CharClass};
pub use matcher::{Advance, Matcher, NoPatternMatched, Pattern};
pub use source_buffer::SourceBuffer;
