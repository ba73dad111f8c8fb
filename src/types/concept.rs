//! Concept types for the master thesaurus

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TermInfo;

/// Concept id → ordered synonym list, iterated in lexical id order
pub type ConceptMap = BTreeMap<String, Vec<String>>;

/// Serialized form of the inverted index (term → entry, sorted by term)
pub type InvertedIndex = BTreeMap<String, TermInfo>;

/// A single concept with its synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub terms: Vec<String>,
}

impl Concept {
    pub fn new(id: String, terms: Vec<String>) -> Self {
        Self { id, terms }
    }

    /// Canonical display label (the first curated term)
    pub fn label(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }
}
