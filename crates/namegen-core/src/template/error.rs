//! Template error types

use std::fmt;

/// Template compilation errors
///
/// Every variant carries the byte offset into the template text where the
/// problem was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A `"` was opened but never closed
    UnterminatedLiteral {
        /// Offset of the opening quote
        offset: usize,
    },

    /// A `{`, `[` or `-` has no matching closing character
    UnclosedDelimiter {
        /// The closing character that was expected
        expected: char,
        /// Offset of the opening character
        offset: usize,
    },

    /// A character that cannot start an element
    UnexpectedCharacter {
        /// The offending character
        found: char,
        /// Offset of the character
        offset: usize,
    },

    /// `$`, `#` or `@` not followed by an identifier
    EmptyName {
        /// The sigil that introduced the name
        sigil: char,
        /// Offset of the sigil
        offset: usize,
    },

    /// A weight, odds or ordinal maximum is missing or malformed
    InvalidNumber {
        /// What went wrong
        message: String,
        /// Offset of the number (or where it was expected)
        offset: usize,
    },

    /// A construct whose body holds no element
    EmptySequence {
        /// Offset where an element was expected
        offset: usize,
    },

    /// A one-of list with no entries
    EmptyList {
        /// Offset of the opening `[`
        offset: usize,
    },

    /// Input left over after a complete element
    TrailingInput {
        /// Offset of the first unconsumed character
        offset: usize,
    },

    /// Nesting deeper than the parser allows
    TooDeep {
        /// The nesting limit
        max_depth: usize,
        /// Offset of the element that crossed the limit
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset into the template where the error was detected
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnterminatedLiteral { offset }
            | ParseError::UnclosedDelimiter { offset, .. }
            | ParseError::UnexpectedCharacter { offset, .. }
            | ParseError::EmptyName { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::EmptySequence { offset }
            | ParseError::EmptyList { offset }
            | ParseError::TrailingInput { offset }
            | ParseError::TooDeep { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnterminatedLiteral { offset } => {
                write!(f, "Unterminated literal starting at offset {}", offset)
            }
            ParseError::UnclosedDelimiter { expected, offset } => {
                write!(
                    f,
                    "Missing closing '{}' for construct opened at offset {}",
                    expected, offset
                )
            }
            ParseError::UnexpectedCharacter { found, offset } => {
                write!(f, "Unexpected character '{}' at offset {}", found, offset)
            }
            ParseError::EmptyName { sigil, offset } => {
                write!(f, "Empty name after '{}' at offset {}", sigil, offset)
            }
            ParseError::InvalidNumber { message, offset } => {
                write!(f, "Invalid number at offset {}: {}", offset, message)
            }
            ParseError::EmptySequence { offset } => {
                write!(f, "Empty token sequence at offset {}", offset)
            }
            ParseError::EmptyList { offset } => {
                write!(f, "Empty one-of list at offset {}", offset)
            }
            ParseError::TrailingInput { offset } => {
                write!(f, "Unexpected trailing input at offset {}", offset)
            }
            ParseError::TooDeep { max_depth, offset } => {
                write!(
                    f,
                    "Template nesting exceeds {} levels at offset {}",
                    max_depth, offset
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Template evaluation errors
///
/// These fail a single generation request and never the process.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Substitution key not present in the context
    MissingKey {
        /// The key that was not found
        key: String,
    },

    /// Word list not present in the context
    MissingList {
        /// The list that was not found
        name: String,
    },

    /// Word list present but holding no words
    EmptyList {
        /// The empty list
        name: String,
    },

    /// One-of list whose weights do not sum to a positive number
    DegenerateWeights {
        /// The computed total weight
        total: f64,
    },

    /// Ordinal whose maximum leaves no value to draw
    InvalidOrdinal {
        /// The stored maximum
        max: u32,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingKey { key } => write!(f, "missing key: {}", key),
            EvalError::MissingList { name } => write!(f, "missing list: {}", name),
            EvalError::EmptyList { name } => write!(f, "empty list: {}", name),
            EvalError::DegenerateWeights { total } => {
                write!(f, "one-of list has non-positive total weight {}", total)
            }
            EvalError::InvalidOrdinal { max } => {
                write!(f, "ordinal maximum {} leaves nothing to draw", max)
            }
        }
    }
}

impl std::error::Error for EvalError {}
