//! Evaluation contexts - word lists and substitutions per request category

mod word_table;

pub use word_table::{Bucket, Column, WordTable, WordTableError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Word list name → words
pub type WordLists = HashMap<String, Vec<String>>;

/// Substitution key → literal value
pub type Substitutions = HashMap<String, String>;

/// Request category selecting which context a name is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Female,
    Male,
    #[default]
    Other,
}

impl Category {
    /// Map a caller-supplied label to a category
    ///
    /// Unrecognized labels fall back to [`Category::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "female" => Category::Female,
            "male" => Category::Male,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Female => "female",
            Category::Male => "male",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only lookup tables for one evaluation
///
/// Maps are reference counted so contexts built from the same word table
/// share their lists.
#[derive(Debug, Clone, Default)]
pub struct ConstructionContext {
    choice_lists: Arc<WordLists>,
    unfiltered_choice_lists: Arc<WordLists>,
    substitutions: Arc<Substitutions>,
}

impl ConstructionContext {
    /// Create a context from its three maps
    pub fn new(
        choice_lists: Arc<WordLists>,
        unfiltered_choice_lists: Arc<WordLists>,
        substitutions: Arc<Substitutions>,
    ) -> Self {
        Self {
            choice_lists,
            unfiltered_choice_lists,
            substitutions,
        }
    }

    /// Look up a word list, filtered or unfiltered
    pub fn list(&self, name: &str, filtered: bool) -> Option<&[String]> {
        let lists = if filtered {
            &self.choice_lists
        } else {
            &self.unfiltered_choice_lists
        };
        lists.get(name).map(Vec::as_slice)
    }

    /// Look up a substitution value
    pub fn substitution(&self, key: &str) -> Option<&str> {
        self.substitutions.get(key).map(String::as_str)
    }

    /// Filtered (category specific) word lists
    pub fn choice_lists(&self) -> &WordLists {
        &self.choice_lists
    }

    /// Unfiltered word lists
    pub fn unfiltered_choice_lists(&self) -> &WordLists {
        &self.unfiltered_choice_lists
    }

    /// Substitution values
    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }
}

/// One context per [`Category`]
#[derive(Debug, Clone, Default)]
pub struct ContextSet {
    pub female: ConstructionContext,
    pub male: ConstructionContext,
    pub other: ConstructionContext,
}

impl ContextSet {
    /// Context for a category
    pub fn for_category(&self, category: Category) -> &ConstructionContext {
        match category {
            Category::Female => &self.female,
            Category::Male => &self.male,
            Category::Other => &self.other,
        }
    }

    /// Pivot a word table into the three category contexts
    ///
    /// Every context shares the same substitutions.
    pub fn from_word_table(table: &WordTable, substitutions: Substitutions) -> Self {
        let substitutions = Arc::new(substitutions);
        let unfiltered = Arc::new(table.lists_for(None));
        let female = Arc::new(table.lists_for(Some(Bucket::Female)));
        let male = Arc::new(table.lists_for(Some(Bucket::Male)));

        Self {
            female: ConstructionContext::new(
                female,
                Arc::clone(&unfiltered),
                Arc::clone(&substitutions),
            ),
            male: ConstructionContext::new(male, Arc::clone(&unfiltered), Arc::clone(&substitutions)),
            other: ConstructionContext::new(Arc::clone(&unfiltered), unfiltered, substitutions),
        }
    }
}
