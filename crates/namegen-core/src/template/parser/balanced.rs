//! Delimiter matching (e.g., finding the `]` that closes a `[`)

use super::Span;
use crate::template::error::ParseError;

/// Split a span that starts with `open` at its matching `close`
///
/// Returns `(body, rest)` where `body` excludes both delimiters.
///
/// # Nesting
///
/// Counts nested occurrences of the same pair only; other delimiter pairs
/// inside the body are left for the recursive parse. Literals never match.
pub(crate) fn split_balanced<'a>(
    span: Span<'a>,
    open: char,
    close: char,
) -> Result<(Span<'a>, Span<'a>), ParseError> {
    let start = span.offset();
    debug_assert!(span.first().is_some_and(|u| u.is_char(open)));

    let mut depth = 0usize;
    for (i, unit) in span.units.iter().enumerate().skip(1) {
        if unit.is_char(open) {
            depth += 1;
        } else if unit.is_char(close) {
            if depth == 0 {
                let body = Span::new(&span.units[1..i], unit.offset);
                return Ok((body, span.advance(i + 1)));
            }
            depth -= 1;
        }
    }

    Err(ParseError::UnclosedDelimiter {
        expected: close,
        offset: start,
    })
}
