//! Java reserved words and identifier rules.

use std::fmt;

/// Words that can never be used as a Java identifier.
///
/// Includes the literals `true`, `false` and `null`, and `_` (reserved since Java 9).
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check if a word is reserved.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Check if a character may start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check if a character may continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Why a name cannot be used as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProblem {
    Empty,
    InvalidStart(char),
    InvalidChar(char),
    Reserved,
}

impl fmt::Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("name is empty"),
            Self::InvalidStart(c) => write!(f, "name cannot start with '{}'", c),
            Self::InvalidChar(c) => write!(f, "name contains invalid character '{}'", c),
            Self::Reserved => f.write_str("name is a reserved word"),
        }
    }
}

/// Check that a name is well formed and not reserved.
pub fn check_identifier(name: &str) -> std::result::Result<(), NameProblem> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(NameProblem::Empty),
        Some(c) if !is_identifier_start(c) => return Err(NameProblem::InvalidStart(c)),
        Some(_) => {}
    }
    if let Some(c) = chars.find(|&c| !is_identifier_part(c)) {
        return Err(NameProblem::InvalidChar(c));
    }
    if is_reserved(name) {
        return Err(NameProblem::Reserved);
    }
    Ok(())
}

/// Check if a name is a usable identifier: well formed and not reserved.
pub fn is_identifier(name: &str) -> bool {
    check_identifier(name).is_ok()
}
