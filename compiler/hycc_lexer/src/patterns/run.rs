//! Patterns that group bytes by class alone.

use hycc_ir::TokenKind;
use hycc_lexer_core::{CharClass, Pattern};

use crate::scanner::Scanner;

/// Greedy run of one class: whitespace, integers.
pub(crate) struct Run {
    class: CharClass,
    kind: TokenKind,
}

impl Run {
    pub(crate) const fn new(class: CharClass, kind: TokenKind) -> Self {
        Run { class, kind }
    }
}

impl Pattern<Scanner> for Run {
    fn predicate(&mut self, state: &Scanner) -> bool {
        state.current_class() == self.class
    }

    fn begin(&mut self, state: &mut Scanner) {
        state.set_cache();
    }

    fn continuation(&mut self, _: &mut Scanner) {}

    fn end(&mut self, state: &mut Scanner) {
        state.emit(self.kind);
    }
}

/// Letter or underscore, then letters, digits, underscores.
#[derive(Default)]
pub(crate) struct Identifier {
    active: bool,
}

impl Pattern<Scanner> for Identifier {
    fn predicate(&mut self, state: &Scanner) -> bool {
        let class = state.current_class();
        if self.active {
            class.is_ident_continue()
        } else {
            class == CharClass::IdStart
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        self.active = true;
        state.set_cache();
    }

    fn continuation(&mut self, _: &mut Scanner) {}

    fn end(&mut self, state: &mut Scanner) {
        state.emit(TokenKind::Identifier);
        self.active = false;
    }
}

/// Exactly one byte per token.
///
/// With no class it accepts any byte, which makes it the catch-all.
pub(crate) struct Single {
    class: Option<CharClass>,
    kind: TokenKind,
    taken: bool,
}

impl Single {
    pub(crate) const fn new(class: Option<CharClass>, kind: TokenKind) -> Self {
        Single {
            class,
            kind,
            taken: false,
        }
    }
}

impl Pattern<Scanner> for Single {
    fn predicate(&mut self, state: &Scanner) -> bool {
        if self.taken {
            return false;
        }
        match self.class {
            Some(class) => state.current_class() == class,
            None => true,
        }
    }

    fn begin(&mut self, state: &mut Scanner) {
        self.taken = true;
        state.set_cache();
    }

    fn continuation(&mut self, _: &mut Scanner) {}

    fn end(&mut self, state: &mut Scanner) {
        state.emit(self.kind);
        self.taken = false;
    }
}
