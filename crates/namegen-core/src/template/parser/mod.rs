//! Recursive-descent parser for the construction language
//!
//! One function per grammar production:
//!
//! ```text
//! Token      := Element+
//! Element    := Literal | Optional | OneofList | TitleCase
//!             | ListSel | UnfilteredListSel | Ordinal | Substitution
//! Optional   := '{' Decimal Token '}'
//! OneofList  := '[' Entry (',' Entry)* ']'
//! Entry      := Decimal Token
//! TitleCase  := '-' Token '+'
//! ListSel    := '$' Identifier
//! UnfilteredListSel := '#' Identifier
//! Ordinal    := '%' Digit+
//! Substitution := '@' Identifier
//! ```
//!
//! A `,` ends the sequence being read. Inside a one-of list that makes it the
//! entry separator; anywhere else the comma is left unconsumed and reported
//! by the enclosing construct.

mod balanced;
mod scalars;

use super::error::ParseError;
use super::lexer::{classify, Unit, UnitKind};
use super::token::{OneofEntry, Token};

use balanced::split_balanced;
use scalars::{read_decimal, read_digits, read_identifier};

/// Maximum nesting of bracketed constructs (malformed input protection)
pub const MAX_NESTING_DEPTH: usize = 64;

/// A window over the unit stream
///
/// `end` is the offset just past the window, used to position errors raised
/// when the window runs out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span<'a> {
    units: &'a [Unit],
    end: usize,
}

impl<'a> Span<'a> {
    fn new(units: &'a [Unit], end: usize) -> Self {
        Self { units, end }
    }

    fn first(&self) -> Option<&'a Unit> {
        self.units.first()
    }

    /// Offset of the first unit, or of the window end when empty
    fn offset(&self) -> usize {
        self.first().map_or(self.end, |u| u.offset)
    }

    fn advance(self, n: usize) -> Self {
        Self {
            units: &self.units[n..],
            end: self.end,
        }
    }
}

/// Parse a template into its token tree
///
/// The whole template must form one token; leftover input is an error.
pub fn parse(template: &str) -> Result<Token, ParseError> {
    let units = classify(template)?;
    let (token, rest) = sequence(Span::new(&units, template.len()), 0)?;

    if let Some(unit) = rest.first() {
        return Err(ParseError::TrailingInput {
            offset: unit.offset,
        });
    }

    tracing::debug!(
        bytes = template.len(),
        nodes = token.node_count(),
        "parsed construction template"
    );
    Ok(token)
}

/// Token := Element+
///
/// Stops at the end of the span or at a `,`. A single element is returned
/// as-is; several become a [`Token::Sequence`].
fn sequence(span: Span<'_>, depth: usize) -> Result<(Token, Span<'_>), ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::TooDeep {
            max_depth: MAX_NESTING_DEPTH,
            offset: span.offset(),
        });
    }

    let mut elements = Vec::new();
    let mut rest = span;

    while let Some(head) = rest.first() {
        match &head.kind {
            UnitKind::Literal(text) => {
                elements.push(Token::Literal(text.clone()));
                rest = rest.advance(1);
            }
            UnitKind::Char(',') => break,
            UnitKind::Char(c) => {
                let (token, next) = element(*c, rest, depth)?;
                elements.push(token);
                rest = next;
            }
        }
    }

    let token = match elements.len() {
        0 => {
            return Err(ParseError::EmptySequence {
                offset: span.offset(),
            })
        }
        1 => elements.remove(0),
        _ => Token::Sequence(elements),
    };
    Ok((token, rest))
}

/// Dispatch on the leading control character
fn element(c: char, span: Span<'_>, depth: usize) -> Result<(Token, Span<'_>), ParseError> {
    match c {
        '{' => optional(span, depth),
        '[' => oneof_list(span, depth),
        '-' => title_case(span, depth),
        '$' => list_selection(span, true),
        '#' => list_selection(span, false),
        '%' => ordinal(span),
        '@' => substitution(span),
        found => Err(ParseError::UnexpectedCharacter {
            found,
            offset: span.offset(),
        }),
    }
}

/// Require that a bracket body was read to its end
fn expect_consumed(rest: Span<'_>) -> Result<(), ParseError> {
    match rest.first() {
        Some(unit) => Err(ParseError::TrailingInput {
            offset: unit.offset,
        }),
        None => Ok(()),
    }
}

/// Optional := '{' Decimal Token '}'
fn optional(span: Span<'_>, depth: usize) -> Result<(Token, Span<'_>), ParseError> {
    let (body, rest) = split_balanced(span, '{', '}')?;

    let weight_offset = body.offset();
    let (odds, after_weight) = read_decimal(body)?;
    if odds > 1.0 {
        return Err(ParseError::InvalidNumber {
            message: format!("odds {} must lie between 0 and 1", odds),
            offset: weight_offset,
        });
    }

    let (inner, leftover) = sequence(after_weight, depth + 1)?;
    expect_consumed(leftover)?;

    Ok((
        Token::Optional {
            odds,
            inner: Box::new(inner),
        },
        rest,
    ))
}

/// OneofList := '[' Entry (',' Entry)* ']'
///
/// Empty entries between commas are skipped.
fn oneof_list(span: Span<'_>, depth: usize) -> Result<(Token, Span<'_>), ParseError> {
    let (body, rest) = split_balanced(span, '[', ']')?;

    let mut entries = Vec::new();
    let mut inner = body;
    while let Some(head) = inner.first() {
        if head.is_char(',') {
            inner = inner.advance(1);
            continue;
        }
        let (weight, after_weight) = read_decimal(inner)?;
        let (token, next) = sequence(after_weight, depth + 1)?;
        entries.push(OneofEntry { weight, token });
        inner = next;
    }

    if entries.is_empty() {
        return Err(ParseError::EmptyList {
            offset: span.offset(),
        });
    }
    Ok((Token::OneofList(entries), rest))
}

/// TitleCase := '-' Token '+'
fn title_case(span: Span<'_>, depth: usize) -> Result<(Token, Span<'_>), ParseError> {
    let (body, rest) = split_balanced(span, '-', '+')?;
    let (base, leftover) = sequence(body, depth + 1)?;
    expect_consumed(leftover)?;
    Ok((Token::TitleCase(Box::new(base)), rest))
}

/// ListSel := '$' Identifier, UnfilteredListSel := '#' Identifier
fn list_selection(span: Span<'_>, filtered: bool) -> Result<(Token, Span<'_>), ParseError> {
    let (name, rest) = named(span)?;
    Ok((Token::ListSelection { name, filtered }, rest))
}

/// Substitution := '@' Identifier
fn substitution(span: Span<'_>) -> Result<(Token, Span<'_>), ParseError> {
    let (key, rest) = named(span)?;
    Ok((Token::Substitution { key }, rest))
}

/// Read the identifier following a sigil
fn named(span: Span<'_>) -> Result<(String, Span<'_>), ParseError> {
    let sigil = span.first().and_then(Unit::as_char).unwrap_or_default();
    let (name, rest) = read_identifier(span.advance(1));
    if name.is_empty() {
        return Err(ParseError::EmptyName {
            sigil,
            offset: span.offset(),
        });
    }
    Ok((name, rest))
}

/// Ordinal := '%' Digit+
fn ordinal(span: Span<'_>) -> Result<(Token, Span<'_>), ParseError> {
    let offset = span.offset();
    let (digits, rest) = read_digits(span.advance(1));

    if digits.is_empty() {
        return Err(ParseError::InvalidNumber {
            message: "expected digits after '%'".to_string(),
            offset,
        });
    }
    let max: u32 = digits.parse().map_err(|_| ParseError::InvalidNumber {
        message: format!("ordinal maximum '{}' is out of range", digits),
        offset,
    })?;
    if max < 2 {
        return Err(ParseError::InvalidNumber {
            message: format!("ordinal maximum must be at least 2, got {}", max),
            offset,
        });
    }

    Ok((Token::OrdinalSelection { max }, rest))
}
