//! Index statistics

use serde::{Deserialize, Serialize};

/// Statistics about a loaded term index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IndexStats {
    pub total_concepts: usize,
    pub total_terms: usize,
    pub ambiguous_terms: usize,
    pub unambiguous_terms: usize,
    /// Term with the most concepts (lexically first on ties)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_ambiguous_term: Option<String>,
    pub max_concepts_per_term: usize,
    pub min_terms_per_concept: usize,
    pub max_terms_per_concept: usize,
    pub avg_terms_per_concept: f64,
}

impl IndexStats {
    /// Share of terms that are ambiguous, as a percentage
    pub fn ambiguous_ratio(&self) -> f64 {
        if self.total_terms == 0 {
            0.0
        } else {
            self.ambiguous_terms as f64 / self.total_terms as f64 * 100.0
        }
    }
}
