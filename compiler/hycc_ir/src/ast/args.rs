//! Function argument lists: `(in a: T, inout b, c)`.

use crate::Token;

use super::Type;

/// How an argument is passed. Spelled as a keyword before the name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PassingMode {
    #[default]
    In,
    Inout,
    Out,
    Move,
    Copy,
    Forward,
}

impl PassingMode {
    /// All modes, in keyword matching order.
    pub const ALL: [PassingMode; 6] = [
        PassingMode::In,
        PassingMode::Inout,
        PassingMode::Out,
        PassingMode::Move,
        PassingMode::Copy,
        PassingMode::Forward,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            PassingMode::In => "in",
            PassingMode::Inout => "inout",
            PassingMode::Out => "out",
            PassingMode::Move => "move",
            PassingMode::Copy => "copy",
            PassingMode::Forward => "forward",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.keyword() == keyword)
    }
}

/// One named argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionArgument {
    pub mode: PassingMode,
    pub name: Token,
    pub ty: Option<Type>,
}

/// Arguments of one list, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionArguments {
    args: Vec<FunctionArgument>,
}

impl FunctionArguments {
    pub fn new(args: Vec<FunctionArgument>) -> Self {
        FunctionArguments { args }
    }

    #[inline]
    pub fn args(&self) -> &[FunctionArgument] {
        &self.args
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
