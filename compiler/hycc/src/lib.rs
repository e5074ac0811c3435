//! hycc front end.
//!
//! [`parse_source`] runs the whole pipeline on one source text:
//!
//! ```text
//! &str -> SourceBuffer -> tokenize -> TokenList -> Parser -> global Scope
//! ```
//!
//! The stages are also usable on their own through the re-exported crates.

use std::sync::Once;

pub use hycc_ir as ir;
pub use hycc_lexer as lexer;
pub use hycc_lexer_core as lexer_core;
pub use hycc_parse as parse;

use hycc_ir::ast::Scope;
use hycc_ir::{SourceBuffer, TokenList};
use hycc_parse::{Parser, SyntaxError};
use tracing::debug;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "HYCC_LOG";
/// Set to `1` for indented, span-nested log output.
pub const LOG_TREE_ENV: &str = "HYCC_LOG_TREE";

/// A source text together with its tokens and syntax tree.
///
/// The tokens and tree hold shares of `buffer`, so they stay valid however
/// long this value lives.
#[derive(Clone, Debug)]
pub struct ParsedSource {
    buffer: SourceBuffer,
    tokens: TokenList,
    scope: Scope,
}

impl ParsedSource {
    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// The global scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_parts(self) -> (SourceBuffer, TokenList, Scope) {
        (self.buffer, self.tokens, self.scope)
    }
}

/// Tokenize `text` and parse it as a global scope.
///
/// # Errors
///
/// Returns the first [`SyntaxError`] the grammar hits.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_source(text: &str) -> Result<ParsedSource, SyntaxError> {
    let buffer = SourceBuffer::new(text);
    let tokens = hycc_lexer::tokenize(&buffer);
    let scope = Parser::from(&tokens).parse_global_scope()?;
    debug!(entries = scope.entries().len(), depth = scope.depth(), "parsed");
    Ok(ParsedSource {
        buffer,
        tokens,
        scope,
    })
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once; only the first call does anything. Enable
/// with `HYCC_LOG=hycc_parse=debug` (or `RUST_LOG`), and add
/// `HYCC_LOG_TREE=1` for hierarchical output. With neither filter variable
/// set, no subscriber is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = log_directives() else {
            return;
        };
        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));

        // Another subscriber may already be installed by the embedding program.
        let _ = if tree_output_requested() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
    });
}

fn log_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

fn tree_output_requested() -> bool {
    std::env::var(LOG_TREE_ENV).is_ok_and(|value| value == "1")
}
