//! Term types for the inverted index

use serde::{Deserialize, Serialize};

/// Inverted index entry: the concepts a term belongs to
///
/// `is_ambiguous` is stored in the dataset file but is never trusted;
/// [`TermInfo::new`] and [`TermInfo::normalized`] recompute it from the ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermInfo {
    pub concept_ids: Vec<String>,
    #[serde(default)]
    pub is_ambiguous: bool,
}

impl TermInfo {
    /// Create an entry from concept ids, sorting them and deriving ambiguity
    pub fn new(concept_ids: Vec<String>) -> Self {
        Self {
            concept_ids,
            is_ambiguous: false,
        }
        .normalized()
    }

    /// Sort and deduplicate the concept ids, then recompute `is_ambiguous`
    pub fn normalized(mut self) -> Self {
        self.concept_ids.sort();
        self.concept_ids.dedup();
        self.is_ambiguous = self.concept_ids.len() > 1;
        self
    }

    /// Check whether the term belongs to the given concept
    pub fn contains(&self, concept_id: &str) -> bool {
        self.concept_ids
            .binary_search_by(|id| id.as_str().cmp(concept_id))
            .is_ok()
    }

    /// Number of concepts the term belongs to
    pub fn concept_count(&self) -> usize {
        self.concept_ids.len()
    }
}

/// A term that denotes more than one concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousTerm {
    pub term: String,
    pub concept_ids: Vec<String>,
}
