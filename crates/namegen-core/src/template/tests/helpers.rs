//! Shared test helpers for template tests

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::context::ConstructionContext;
use crate::template::RandomSource;

/// Random source replaying scripted draws
///
/// Panics when a draw is requested that was not scripted, so tests also
/// pin how many draws an evaluation makes.
#[derive(Debug, Default)]
pub(super) struct ScriptedRandom {
    floats: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn floats(mut self, draws: &[f64]) -> Self {
        self.floats.extend(draws);
        self
    }

    pub(super) fn indices(mut self, draws: &[usize]) -> Self {
        self.indices.extend(draws);
        self
    }

    /// Whether every scripted draw was consumed
    pub(super) fn exhausted(&self) -> bool {
        self.floats.is_empty() && self.indices.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().expect("unscripted float draw")
    }

    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.indices.pop_front().expect("unscripted index draw");
        assert!(index < bound, "scripted index {} out of bound {}", index, bound);
        index
    }
}

fn lists(entries: Vec<(&str, Vec<&str>)>) -> HashMap<String, Vec<String>> {
    entries
        .into_iter()
        .map(|(name, words)| {
            (
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

/// Context with a filtered `names` list, a wider unfiltered one, an empty
/// list and one substitution
pub(super) fn sample_context() -> ConstructionContext {
    let filtered = lists(vec![
        ("names", vec!["Option1", "Option2", "Option3"]),
        ("nothing", vec![]),
        ("words", vec!["the lord of rings"]),
    ]);
    let unfiltered = lists(vec![
        ("names", vec!["Option1", "Option2", "Option3", "Extra"]),
        ("nothing", vec![]),
        ("words", vec!["the lord of rings"]),
    ]);
    let substitutions = [("KEY".to_string(), "Value".to_string())]
        .into_iter()
        .collect();
    ConstructionContext::new(
        Arc::new(filtered),
        Arc::new(unfiltered),
        Arc::new(substitutions),
    )
}

/// Context with nothing in it
pub(super) fn empty_context() -> ConstructionContext {
    ConstructionContext::default()
}

/// Shorthand for a literal token
pub(super) fn lit(text: &str) -> crate::template::Token {
    crate::template::Token::Literal(text.to_string())
}
