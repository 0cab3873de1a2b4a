//! Scalar readers: identifiers, digit runs and decimal weights

use super::Span;
use crate::template::error::ParseError;

/// Read the longest run of units whose character satisfies `accept`
fn read_run<'a>(span: Span<'a>, accept: impl Fn(char) -> bool) -> (String, Span<'a>) {
    let len = span
        .units
        .iter()
        .take_while(|u| u.as_char().is_some_and(&accept))
        .count();
    let text = span.units[..len]
        .iter()
        .filter_map(|u| u.as_char())
        .collect();
    (text, span.advance(len))
}

/// Identifier := (Letter | '_')*
pub(crate) fn read_identifier(span: Span<'_>) -> (String, Span<'_>) {
    read_run(span, |c| c.is_alphabetic() || c == '_')
}

/// Digit*
pub(crate) fn read_digits(span: Span<'_>) -> (String, Span<'_>) {
    read_run(span, |c| c.is_ascii_digit())
}

/// Decimal := (Digit | '.')+, parsed as a finite `f64`
pub(crate) fn read_decimal(span: Span<'_>) -> Result<(f64, Span<'_>), ParseError> {
    let offset = span.offset();
    let (text, rest) = read_run(span, |c| c.is_ascii_digit() || c == '.');

    if text.is_empty() {
        return Err(ParseError::InvalidNumber {
            message: "expected a decimal weight".to_string(),
            offset,
        });
    }

    let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
        message: format!("'{}' is not a decimal number", text),
        offset,
    })?;

    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            message: format!("'{}' is out of range", text),
            offset,
        });
    }

    Ok((value, rest))
}
