//! Token tree evaluation

use crate::context::ConstructionContext;

use super::casing::{ordinal, title_case};
use super::error::EvalError;
use super::random::RandomSource;
use super::token::{OneofEntry, Token};

/// Evaluate a token tree into a string
///
/// Pure with respect to `(token, ctx)`: the same sequence of random draws
/// always produces the same output. The first failing lookup aborts the
/// whole evaluation; no partial string is returned.
pub fn evaluate<R: RandomSource + ?Sized>(
    token: &Token,
    rng: &mut R,
    ctx: &ConstructionContext,
) -> Result<String, EvalError> {
    let mut output = String::new();
    render(token, rng, ctx, &mut output)?;
    Ok(output)
}

fn render<R: RandomSource + ?Sized>(
    token: &Token,
    rng: &mut R,
    ctx: &ConstructionContext,
    output: &mut String,
) -> Result<(), EvalError> {
    match token {
        Token::Literal(text) => output.push_str(text),
        Token::Sequence(children) => {
            for child in children {
                render(child, rng, ctx, output)?;
            }
        }
        Token::Optional { odds, inner } => {
            if rng.next_f64() < *odds {
                render(inner, rng, ctx, output)?;
            }
        }
        Token::OneofList(entries) => {
            let chosen = select_entry(entries, rng)?;
            render(chosen, rng, ctx, output)?;
        }
        Token::ListSelection { name, filtered } => {
            output.push_str(select_word(ctx, name, *filtered, rng)?);
        }
        Token::OrdinalSelection { max } => {
            if *max < 2 {
                return Err(EvalError::InvalidOrdinal { max: *max });
            }
            let value = rng.next_index((*max - 1) as usize) as u32 + 1;
            output.push_str(&ordinal(value));
        }
        Token::Substitution { key } => {
            let value = ctx
                .substitution(key)
                .ok_or_else(|| EvalError::MissingKey { key: key.clone() })?;
            output.push_str(value);
        }
        Token::TitleCase(base) => {
            let mut inner = String::new();
            render(base, rng, ctx, &mut inner)?;
            output.push_str(&title_case(&inner));
        }
    }
    Ok(())
}

/// Roulette-wheel selection over entries in declared order
///
/// The draw is scaled by the total weight and each entry's weight is
/// subtracted in turn; the first entry that brings the running value to
/// zero or below wins.
fn select_entry<'t, R: RandomSource + ?Sized>(
    entries: &'t [OneofEntry],
    rng: &mut R,
) -> Result<&'t Token, EvalError> {
    let total: f64 = entries.iter().map(|e| e.weight).sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(EvalError::DegenerateWeights { total });
    }

    let mut remaining = rng.next_f64() * total;
    for entry in entries {
        remaining -= entry.weight;
        if remaining <= 0.0 {
            return Ok(&entry.token);
        }
    }

    // Rounding can leave a sliver above zero after the last subtraction.
    entries
        .iter()
        .rev()
        .find(|e| e.weight > 0.0)
        .map(|e| &e.token)
        .ok_or(EvalError::DegenerateWeights { total })
}

fn select_word<'c, R: RandomSource + ?Sized>(
    ctx: &'c ConstructionContext,
    name: &str,
    filtered: bool,
    rng: &mut R,
) -> Result<&'c str, EvalError> {
    let words = ctx
        .list(name, filtered)
        .ok_or_else(|| EvalError::MissingList {
            name: name.to_string(),
        })?;
    if words.is_empty() {
        return Err(EvalError::EmptyList {
            name: name.to_string(),
        });
    }
    Ok(words[rng.next_index(words.len())].as_str())
}
