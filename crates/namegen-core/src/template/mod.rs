//! Template module - name construction language
//!
//! This module compiles the name construction language into a token tree and
//! evaluates that tree against a [`ConstructionContext`] and a random source.
//!
//! ## Philosophy
//!
//! - **Compile once**: the template is parsed at startup and the tree is never mutated
//! - **Evaluate many**: every request walks the shared tree with its own random source
//! - **No partial output**: every failure is reported, never papered over
//!
//! ## Syntax
//!
//! - Literal text: `"Sir "` (no escapes, cannot contain `"`)
//! - Optional fragment: `{0.3 "the "}` (emitted with probability 0.3)
//! - Weighted choice: `[0.5 "a", 0.3 "b", 0.2 "c"]`
//! - Title case: `-"the lord of rings"+`
//! - Word list: `$FirstName` (category filtered) or `#FirstName` (unfiltered)
//! - Ordinal: `%26` (1st ..= 25th)
//! - Substitution: `@KEY`
//!
//! Whitespace outside quotes is insignificant.
//!
//! [`ConstructionContext`]: crate::context::ConstructionContext

mod casing;
pub mod error;
mod eval;
mod lexer;
mod parser;
mod random;
mod token;

pub use casing::{ordinal, title_case};
pub use error::{EvalError, ParseError};
pub use eval::evaluate;
pub use parser::{parse, MAX_NESTING_DEPTH};
pub use random::RandomSource;
pub use token::{OneofEntry, Token};

#[cfg(test)]
mod tests;
