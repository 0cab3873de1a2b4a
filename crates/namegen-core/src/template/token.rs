//! Token tree for the construction language

use std::collections::BTreeSet;
use std::fmt;

use crate::context::ConstructionContext;

use super::error::EvalError;
use super::random::RandomSource;

/// A parsed template
///
/// Built once by [`parse`](super::parse) and never mutated afterwards, so a
/// single tree can be evaluated from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Fixed text, emitted verbatim
    Literal(String),

    /// Children evaluated in order and concatenated
    Sequence(Vec<Token>),

    /// `inner` emitted with probability `odds`, otherwise nothing
    Optional { odds: f64, inner: Box<Token> },

    /// Exactly one entry, picked by weighted draw
    OneofList(Vec<OneofEntry>),

    /// A uniformly random word from a named list
    ListSelection { name: String, filtered: bool },

    /// A random ordinal in `1..max`
    OrdinalSelection { max: u32 },

    /// A literal looked up by key
    Substitution { key: String },

    /// `base` re-cased as a title
    TitleCase(Box<Token>),
}

/// One weighted alternative of a [`Token::OneofList`]
#[derive(Debug, Clone, PartialEq)]
pub struct OneofEntry {
    pub weight: f64,
    pub token: Token,
}

impl Token {
    /// Evaluate this tree, see [`evaluate`](super::evaluate)
    pub fn evaluate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        ctx: &ConstructionContext,
    ) -> Result<String, EvalError> {
        super::eval::evaluate(self, rng, ctx)
    }

    /// Names of every word list the tree can select from
    ///
    /// Returns `(name, filtered)` pairs in sorted order.
    pub fn referenced_lists(&self) -> BTreeSet<(String, bool)> {
        let mut out = BTreeSet::new();
        self.walk(&mut |token| {
            if let Token::ListSelection { name, filtered } = token {
                out.insert((name.clone(), *filtered));
            }
        });
        out
    }

    /// Every substitution key the tree can look up
    pub fn referenced_keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.walk(&mut |token| {
            if let Token::Substitution { key } = token {
                out.insert(key.clone());
            }
        });
        out
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Pre-order traversal
    fn walk(&self, visit: &mut dyn FnMut(&Token)) {
        visit(self);
        match self {
            Token::Sequence(children) => children.iter().for_each(|c| c.walk(visit)),
            Token::Optional { inner, .. } => inner.walk(visit),
            Token::OneofList(entries) => entries.iter().for_each(|e| e.token.walk(visit)),
            Token::TitleCase(base) => base.walk(visit),
            Token::Literal(_)
            | Token::ListSelection { .. }
            | Token::OrdinalSelection { .. }
            | Token::Substitution { .. } => {}
        }
    }
}

/// Canonical source form
///
/// Parsing the output yields an equal tree.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "\"{}\"", text),
            Token::Sequence(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            Token::Optional { odds, inner } => write!(f, "{{{} {}}}", odds, inner),
            Token::OneofList(entries) => {
                f.write_str("[")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", entry.weight, entry.token)?;
                }
                f.write_str("]")
            }
            Token::ListSelection { name, filtered } => {
                let sigil = if *filtered { '$' } else { '#' };
                write!(f, "{}{}", sigil, name)
            }
            Token::OrdinalSelection { max } => write!(f, "%{}", max),
            Token::Substitution { key } => write!(f, "@{}", key),
            Token::TitleCase(base) => write!(f, "-{}+", base),
        }
    }
}
