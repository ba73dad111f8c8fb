//! Expansion result types

use serde::{Deserialize, Serialize};

use crate::index::literal_query;

/// Result of expanding a term to its synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// The queried term, as given
    pub original: String,
    /// Concepts the expansion was drawn from
    pub concept_ids: Vec<String>,
    pub is_ambiguous: bool,
    /// Deduplicated synonyms, ordered by concept id then curated position
    pub expanded_terms: Vec<String>,
    /// Boolean OR query over `expanded_terms`
    pub query: String,
}

impl ExpansionResult {
    /// Check whether a term is part of the expansion
    pub fn contains(&self, term: &str) -> bool {
        self.expanded_terms.iter().any(|t| t == term)
    }
}

/// Expansion of a free-form query, with literal fallback for unknown terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    /// Whether the term was found in the index
    pub found: bool,
    #[serde(flatten)]
    pub expansion: ExpansionResult,
}

impl QueryPlan {
    /// Plan for a term found in the index
    pub fn expanded(expansion: ExpansionResult) -> Self {
        Self {
            found: true,
            expansion,
        }
    }

    /// Plan for an unknown term: search for it literally
    pub fn literal(term: &str) -> Self {
        Self {
            found: false,
            expansion: ExpansionResult {
                original: term.to_string(),
                concept_ids: Vec::new(),
                is_ambiguous: false,
                expanded_terms: vec![term.to_string()],
                query: literal_query(term),
            },
        }
    }

    /// The boolean query to run
    pub fn query(&self) -> &str {
        &self.expansion.query
    }
}
