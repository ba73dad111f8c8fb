//! Term index: synonym expansion and ambiguity resolution
//!
//! [`TermIndex`] holds the master thesaurus (concept id → synonyms) and its
//! inverted index (term → concept ids). Both are fixed at construction and
//! checked to be exact transposes of each other, so every query is a pure
//! read that can be shared across threads without locking.
//!
//! # Example
//!
//! ```
//! use medical_thesaurus::index::TermIndex;
//! use medical_thesaurus::types::ConceptMap;
//!
//! let mut concepts = ConceptMap::new();
//! concepts.insert(
//!     "C0026".to_string(),
//!     vec!["CIL".to_string(), "CYL".to_string(), "Cilindro or astigmatismo".to_string()],
//! );
//!
//! let index = TermIndex::from_concepts(concepts).unwrap();
//! let result = index.expand("CIL").unwrap();
//! assert_eq!(result.query, "(CIL OR CYL OR \"Cilindro or astigmatismo\")");
//! ```

mod build;
mod error;
mod policy;
mod query;
mod stats;

use std::collections::{HashMap, HashSet};

use crate::types::{
    AmbiguousTerm, Concept, ConceptMap, ExpansionResult, IndexStats, InvertedIndex, QueryPlan,
    TermInfo,
};

pub use build::derive_inverted_index;
pub use error::{IndexError, IndexResult};
pub use policy::ExpansionPolicy;
pub use query::{build_boolean_query, literal_query, quote_term};

/// Read-only synonym index over a validated thesaurus
#[derive(Debug, Clone)]
pub struct TermIndex {
    /// concept id → curated synonyms (first is the canonical label)
    concepts: ConceptMap,

    /// term → concepts containing it, ids sorted
    inverted: HashMap<String, TermInfo>,

    policy: ExpansionPolicy,
}

impl TermIndex {
    /// Build an index from a concept map and a supplied inverted index
    ///
    /// Stored ambiguity flags are recomputed. Fails with
    /// [`IndexError::InconsistentIndex`] unless the two structures are exact
    /// transposes of each other.
    pub fn new<I>(concepts: ConceptMap, inverted: I) -> IndexResult<Self>
    where
        I: IntoIterator<Item = (String, TermInfo)>,
    {
        let inverted = build::normalize_entries(inverted)?;
        build::validate_transpose(&concepts, &inverted)?;

        Ok(Self {
            concepts,
            inverted,
            policy: ExpansionPolicy::default(),
        })
    }

    /// Build an index from a concept map alone, deriving the inverted index
    pub fn from_concepts(concepts: ConceptMap) -> IndexResult<Self> {
        let inverted = derive_inverted_index(&concepts);
        build::validate_transpose(&concepts, &inverted)?;

        Ok(Self {
            concepts,
            inverted,
            policy: ExpansionPolicy::default(),
        })
    }

    /// Set the policy applied to ambiguous terms
    pub fn with_policy(mut self, policy: ExpansionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Look up a term by exact string equality
    pub fn lookup(&self, term: &str) -> IndexResult<&TermInfo> {
        self.inverted
            .get(term)
            .ok_or_else(|| IndexError::TermNotFound(term.to_string()))
    }

    /// Expand a term to the synonyms of every concept it belongs to
    ///
    /// Under [`ExpansionPolicy::RequireDisambiguation`] an ambiguous term is
    /// refused with [`IndexError::AmbiguousTerm`].
    pub fn expand(&self, term: &str) -> IndexResult<ExpansionResult> {
        let info = self.lookup(term)?;

        if info.is_ambiguous && self.policy == ExpansionPolicy::RequireDisambiguation {
            return Err(IndexError::AmbiguousTerm {
                term: term.to_string(),
                concept_ids: info.concept_ids.clone(),
            });
        }

        Ok(self.expansion(term, info, &info.concept_ids))
    }

    /// Expand a term within a single one of its concepts
    pub fn expand_in_concept(&self, term: &str, concept_id: &str) -> IndexResult<ExpansionResult> {
        let info = self.lookup(term)?;

        if !info.contains(concept_id) {
            return Err(IndexError::ConceptMismatch {
                term: term.to_string(),
                concept_id: concept_id.to_string(),
            });
        }

        Ok(self.expansion(term, info, &[concept_id.to_string()]))
    }

    /// Expand a raw query, searching literally for unknown terms
    pub fn expand_query(&self, raw: &str) -> IndexResult<QueryPlan> {
        let term = raw.trim();
        match self.expand(term) {
            Ok(expansion) => Ok(QueryPlan::expanded(expansion)),
            Err(IndexError::TermNotFound(_)) => Ok(QueryPlan::literal(term)),
            Err(e) => Err(e),
        }
    }

    fn expansion(&self, term: &str, info: &TermInfo, concept_ids: &[String]) -> ExpansionResult {
        let expanded_terms = self.collect_terms(concept_ids);
        let query = build_boolean_query(&expanded_terms);

        ExpansionResult {
            original: term.to_string(),
            concept_ids: concept_ids.to_vec(),
            is_ambiguous: info.is_ambiguous,
            expanded_terms,
            query,
        }
    }

    /// Union the synonyms of the given concepts, keeping first-seen order
    fn collect_terms(&self, concept_ids: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut terms = Vec::new();

        for concept_id in concept_ids {
            let Some(synonyms) = self.concepts.get(concept_id) else {
                continue;
            };
            for synonym in synonyms {
                if seen.insert(synonym.as_str()) {
                    terms.push(synonym.clone());
                }
            }
        }

        terms
    }

    /// Get the synonyms of a concept
    pub fn concept(&self, concept_id: &str) -> Option<&[String]> {
        self.concepts.get(concept_id).map(Vec::as_slice)
    }

    /// Get a concept as an owned value
    pub fn get_concept(&self, concept_id: &str) -> Option<Concept> {
        self.concepts
            .get(concept_id)
            .map(|terms| Concept::new(concept_id.to_string(), terms.clone()))
    }

    /// Canonical display label of a concept
    pub fn canonical_label(&self, concept_id: &str) -> Option<&str> {
        self.concepts
            .get(concept_id)
            .and_then(|terms| terms.first())
            .map(String::as_str)
    }

    /// All ambiguous terms, ordered case-insensitively
    pub fn ambiguous_terms(&self) -> Vec<AmbiguousTerm> {
        let mut terms: Vec<AmbiguousTerm> = self
            .inverted
            .iter()
            .filter(|(_, info)| info.is_ambiguous)
            .map(|(term, info)| AmbiguousTerm {
                term: term.clone(),
                concept_ids: info.concept_ids.clone(),
            })
            .collect();

        terms.sort_by(|a, b| {
            a.term
                .to_lowercase()
                .cmp(&b.term.to_lowercase())
                .then_with(|| a.term.cmp(&b.term))
        });
        terms
    }

    /// Check if a term is indexed
    pub fn contains(&self, term: &str) -> bool {
        self.inverted.contains_key(term)
    }

    /// Number of concepts
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    /// The underlying concept map
    pub fn concepts(&self) -> &ConceptMap {
        &self.concepts
    }

    /// Inverted index in serialized (term-sorted) form
    pub fn to_inverted_index(&self) -> InvertedIndex {
        self.inverted
            .iter()
            .map(|(term, info)| (term.clone(), info.clone()))
            .collect()
    }

    /// Compute index statistics
    pub fn stats(&self) -> IndexStats {
        stats::collect(&self.concepts, &self.inverted)
    }
}
