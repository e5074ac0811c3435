//! Operator lexemes recognised by maximal munch.

/// Every multi-byte operator, plus the single-byte ones, longest first.
///
/// A single operator byte missing here (such as `*`) still forms a
/// one-byte operator token; it just never grows into a longer one.
static OPERATOR_CATALOG: [&str; 39] = [
    "<<=", ">>=", "<=>", //
    "&=", "^=", "|=", "->", "++", "--", "||", "&&", "+=", "-=", "*=", "/=", "%=", "<<", ">>",
    "<=", ">=", "==", "!=", //
    "!", "#", "%", "&", "+", "-", "/", "<", "=", ">", "?", "\\", "^", "|", "~", "$", "@",
];

/// Length of the longest cataloged operator.
pub(crate) const LONGEST_OPERATOR: usize = 3;

/// The operator catalog, longest lexemes first.
pub fn operator_catalog() -> &'static [&'static str] {
    &OPERATOR_CATALOG
}

/// Is `lexeme` a cataloged operator?
pub(crate) fn is_cataloged(lexeme: &[u8]) -> bool {
    lexeme.len() <= LONGEST_OPERATOR && OPERATOR_CATALOG.iter().any(|op| op.as_bytes() == lexeme)
}
