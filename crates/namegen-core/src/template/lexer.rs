//! Lexical classification for the construction language
//!
//! Folds quoted literals into finished tokens and passes every other
//! significant character through for the parser to interpret by position.

use super::error::ParseError;

/// Atomic unit classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UnitKind {
    /// A control or name character outside of quotes
    Char(char),

    /// A complete `"..."` literal, quotes removed
    Literal(String),
}

/// A single atomic unit with its source position
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Unit {
    /// Unit classification
    pub kind: UnitKind,
    /// Byte offset of the character (or opening quote) in the template
    pub offset: usize,
}

impl Unit {
    /// The character this unit holds, if it is not a literal
    pub fn as_char(&self) -> Option<char> {
        match self.kind {
            UnitKind::Char(c) => Some(c),
            UnitKind::Literal(_) => None,
        }
    }

    /// Check if this unit is exactly the character `c`
    pub fn is_char(&self, c: char) -> bool {
        self.as_char() == Some(c)
    }
}

/// Classification state machine
///
/// ```text
/// Normal ──"───> InLiteral ──"───> [Yield Literal] → Normal
///   │                │
///   │ (whitespace)   │ (any other char)
///   └─> skip         └─> accumulate
///
/// End of input while InLiteral → UnterminatedLiteral
/// ```
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Outside of quotes
    Normal,

    /// Inside `"..."`
    InLiteral {
        /// Offset of the opening quote
        start: usize,
        /// Offset of the first content byte
        content_start: usize,
    },
}

/// Iterator over the atomic units of a template
///
/// Forward-only: every character is visited exactly once.
pub(crate) struct UnitStream<'a> {
    text: &'a str,
    chars: std::str::CharIndices<'a>,
    state: ScanState,
}

impl<'a> UnitStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            state: ScanState::Normal,
        }
    }

    /// Whitespace that carries no meaning outside of quotes
    ///
    /// Tab is accepted alongside space and line breaks.
    fn is_insignificant(c: char) -> bool {
        matches!(c, ' ' | '\n' | '\r' | '\t')
    }
}

impl<'a> Iterator for UnitStream<'a> {
    type Item = Result<Unit, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((offset, c)) = self.chars.next() else {
                return match std::mem::replace(&mut self.state, ScanState::Normal) {
                    ScanState::Normal => None,
                    ScanState::InLiteral { start, .. } => {
                        Some(Err(ParseError::UnterminatedLiteral { offset: start }))
                    }
                };
            };

            match self.state {
                ScanState::Normal if c == '"' => {
                    self.state = ScanState::InLiteral {
                        start: offset,
                        content_start: offset + c.len_utf8(),
                    };
                }
                ScanState::Normal if Self::is_insignificant(c) => {}
                ScanState::Normal => {
                    return Some(Ok(Unit {
                        kind: UnitKind::Char(c),
                        offset,
                    }));
                }
                ScanState::InLiteral {
                    start,
                    content_start,
                } if c == '"' => {
                    self.state = ScanState::Normal;
                    return Some(Ok(Unit {
                        kind: UnitKind::Literal(self.text[content_start..offset].to_string()),
                        offset: start,
                    }));
                }
                ScanState::InLiteral { .. } => {}
            }
        }
    }
}

/// Classify a whole template into atomic units
pub(crate) fn classify(text: &str) -> Result<Vec<Unit>, ParseError> {
    UnitStream::new(text).collect()
}
