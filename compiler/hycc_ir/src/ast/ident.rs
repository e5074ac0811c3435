//! Qualified identifiers: `name`, `a::b`, `::global`.

use std::fmt;

use crate::Token;

/// One piece of a qualified identifier.
#[derive(Clone, Debug)]
pub enum IdentUnit {
    /// An identifier token.
    Name(Token),
    /// The `::` separator.
    ScopeResolution,
}

impl IdentUnit {
    /// Source text of the unit; `::` for a separator.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            IdentUnit::Name(token) => token.text(),
            IdentUnit::ScopeResolution => std::borrow::Cow::Borrowed("::"),
        }
    }
}

// Names compare by bytes; where they came from does not matter.
impl PartialEq for IdentUnit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (IdentUnit::ScopeResolution, IdentUnit::ScopeResolution) => true,
            (IdentUnit::Name(a), IdentUnit::Name(b)) => a.bytes() == b.bytes(),
            _ => false,
        }
    }
}

impl Eq for IdentUnit {}

/// A possibly scoped name such as `std::vector` or `::x`.
///
/// Never empty and never ends with `::` when produced by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedIdent {
    units: Vec<IdentUnit>,
}

impl QualifiedIdent {
    pub fn new(units: Vec<IdentUnit>) -> Self {
        QualifiedIdent { units }
    }

    #[inline]
    pub fn units(&self) -> &[IdentUnit] {
        &self.units
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Name tokens only, in order.
    pub fn names(&self) -> impl Iterator<Item = &Token> {
        self.units.iter().filter_map(|unit| match unit {
            IdentUnit::Name(token) => Some(token),
            IdentUnit::ScopeResolution => None,
        })
    }
}

impl fmt::Display for QualifiedIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            f.write_str(&unit.text())?;
        }
        Ok(())
    }
}
