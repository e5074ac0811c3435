//! Block scopes.

use std::mem;

/// A `{ ... }` block, or the whole source for the global scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    entries: Vec<ScopeEntry>,
    is_global: bool,
}

/// Something that appears inside a scope, in source order.
///
/// Statements, declarations and expressions will join this enum as their
/// grammar rules are written.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeEntry {
    /// A `{ ... }` block.
    Nested(Scope),
}

impl Scope {
    pub fn global(entries: Vec<ScopeEntry>) -> Self {
        Scope {
            entries,
            is_global: true,
        }
    }

    pub fn nested(entries: Vec<ScopeEntry>) -> Self {
        Scope {
            entries,
            is_global: false,
        }
    }

    #[inline]
    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.is_global
    }

    /// Deepest nesting below this scope; 0 with no nested scopes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((scope, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            for entry in &scope.entries {
                match entry {
                    ScopeEntry::Nested(nested) => pending.push((nested, depth + 1)),
                }
            }
        }
        deepest
    }
}

// Flatten nested scopes into one worklist so deep nesting drops without
// recursing.
impl Drop for Scope {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.entries);
        while let Some(entry) = pending.pop() {
            match entry {
                ScopeEntry::Nested(mut scope) => pending.append(&mut scope.entries),
            }
        }
    }
}
