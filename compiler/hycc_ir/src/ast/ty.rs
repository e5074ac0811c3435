//! Type expressions: `T`, `const T`, `*T`, `const * const a::T`.

use std::{fmt, mem};

use super::QualifiedIdent;

/// A parsed type.
///
/// Function types (argument list plus return type) are not parsed yet and
/// have no variant here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Type {
    pub is_const: bool,
    pub kind: TypeKind,
}

/// What a [`Type`] is, apart from its `const` qualifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    /// `*T`
    Pointer(Box<Type>),
    /// A type named by a qualified identifier.
    Named(QualifiedIdent),
}

impl Type {
    pub fn pointer(is_const: bool, pointee: Type) -> Self {
        Type {
            is_const,
            kind: TypeKind::Pointer(Box::new(pointee)),
        }
    }

    pub fn named(is_const: bool, name: QualifiedIdent) -> Self {
        Type {
            is_const,
            kind: TypeKind::Named(name),
        }
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.is_const
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        matches!(self.kind, TypeKind::Pointer(_))
    }

    #[inline]
    pub fn is_regular_type(&self) -> bool {
        matches!(self.kind, TypeKind::Named(_))
    }

    /// The pointed-to type, if this is a pointer.
    pub fn pointee(&self) -> Option<&Type> {
        match &self.kind {
            TypeKind::Pointer(inner) => Some(inner),
            TypeKind::Named(_) => None,
        }
    }

    /// The type name, if this is a named type.
    pub fn name(&self) -> Option<&QualifiedIdent> {
        match &self.kind {
            TypeKind::Named(name) => Some(name),
            TypeKind::Pointer(_) => None,
        }
    }

    /// Number of pointer levels before the named type.
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut ty = self;
        while let Some(inner) = ty.pointee() {
            depth += 1;
            ty = inner;
        }
        depth
    }
}

// The derived drop glue recurses once per pointer level; unlink the chain
// iteratively so `****...T` of any length can be dropped.
impl Drop for Type {
    fn drop(&mut self) {
        let mut kind = mem::replace(&mut self.kind, unlinked());
        while let TypeKind::Pointer(mut inner) = kind {
            kind = mem::replace(&mut inner.kind, unlinked());
        }
    }
}

fn unlinked() -> TypeKind {
    TypeKind::Named(QualifiedIdent::new(Vec::new()))
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            f.write_str("const ")?;
        }
        match &self.kind {
            TypeKind::Pointer(inner) => write!(f, "*{inner}"),
            TypeKind::Named(name) => write!(f, "{name}"),
        }
    }
}
