//! Per-byte lexical classification.
//!
//! A 256-entry table built at compile time maps every byte to exactly one
//! [`CharClass`]. Bytes outside ASCII are always [`CharClass::Other`]; the
//! front end classifies code units, not code points.

/// Lexical class of a single source byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// Tab, line feed, vertical tab, form feed, carriage return, space.
    Whitespace,
    /// `A-Z`, `a-z`, `_`.
    IdStart,
    /// `0-9`.
    Digit,
    /// `"`, `'`, `` ` ``.
    LiteralDelimiter,
    /// `( ) , . : ; [ ] { }`.
    SemanticScope,
    /// Bytes that may appear in an operator lexeme.
    OperatorUnit,
    /// Everything else, including NUL and all bytes `>= 0x80`.
    Other,
}

impl CharClass {
    /// Returns `true` for bytes that may continue an identifier.
    #[inline]
    pub const fn is_ident_continue(self) -> bool {
        matches!(self, Self::IdStart | Self::Digit)
    }
}

const fn class_of(b: u8) -> CharClass {
    match b {
        b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ' => CharClass::Whitespace,
        b'A'..=b'Z' | b'a'..=b'z' | b'_' => CharClass::IdStart,
        b'0'..=b'9' => CharClass::Digit,
        b'"' | b'\'' | b'`' => CharClass::LiteralDelimiter,
        b'(' | b')' | b',' | b'.' | b':' | b';' | b'[' | b']' | b'{' | b'}' => {
            CharClass::SemanticScope
        }
        b'!' | b'#' | b'$' | b'%' | b'&' | b'*' | b'+' | b'-' | b'/' | b'<' | b'=' | b'>'
        | b'?' | b'@' | b'\\' | b'^' | b'|' | b'~' => CharClass::OperatorUnit,
        _ => CharClass::Other,
    }
}

static CLASS_TABLE: [CharClass; 256] = {
    let mut table = [CharClass::Other; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "loop bound keeps i below 256"
        )]
        let b = i as u8;
        table[i] = class_of(b);
        i += 1;
    }
    table
};

/// Classify one byte.
#[inline]
pub fn classify(b: u8) -> CharClass {
    CLASS_TABLE[b as usize]
}
