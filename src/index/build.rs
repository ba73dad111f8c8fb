//! Inverted index derivation and transpose validation

use std::collections::HashMap;

use rayon::prelude::*;

use super::error::{IndexError, IndexResult};
use crate::types::{ConceptMap, TermInfo};

/// Concept count at which validation switches to parallel iteration
const PARALLEL_VALIDATION_THRESHOLD: usize = 1000;

/// Derive the inverted index from a concept map
///
/// Terms are taken exactly as authored, so the result is always the
/// transpose of `concepts`.
pub fn derive_inverted_index(concepts: &ConceptMap) -> HashMap<String, TermInfo> {
    let mut term_to_concepts: HashMap<String, Vec<String>> = HashMap::new();

    for (concept_id, terms) in concepts {
        for term in terms {
            let ids = term_to_concepts.entry(term.clone()).or_default();
            // Concepts are visited in id order, so a repeat can only be the last one
            if ids.last() != Some(concept_id) {
                ids.push(concept_id.clone());
            }
        }
    }

    term_to_concepts
        .into_iter()
        .map(|(term, ids)| (term, TermInfo::new(ids)))
        .collect()
}

/// Normalize supplied index entries, recomputing the ambiguity flag
pub fn normalize_entries<I>(entries: I) -> IndexResult<HashMap<String, TermInfo>>
where
    I: IntoIterator<Item = (String, TermInfo)>,
{
    let mut index = HashMap::new();
    for (term, info) in entries {
        if info.concept_ids.is_empty() {
            return Err(IndexError::InconsistentIndex(format!(
                "index entry for term '{}' has no concept ids",
                term
            )));
        }
        index.insert(term, info.normalized());
    }
    Ok(index)
}

/// Check that `index` is the exact transpose of `concepts`
///
/// Expects normalized entries (sorted concept ids).
pub fn validate_transpose(
    concepts: &ConceptMap,
    index: &HashMap<String, TermInfo>,
) -> IndexResult<()> {
    if concepts.len() >= PARALLEL_VALIDATION_THRESHOLD {
        concepts
            .par_iter()
            .try_for_each(|(id, terms)| check_concept(id, terms, index))?;
        index
            .par_iter()
            .try_for_each(|(term, info)| check_entry(term, info, concepts))
    } else {
        concepts
            .iter()
            .try_for_each(|(id, terms)| check_concept(id, terms, index))?;
        index
            .iter()
            .try_for_each(|(term, info)| check_entry(term, info, concepts))
    }
}

/// Every term of the concept must map back to it
fn check_concept(
    concept_id: &str,
    terms: &[String],
    index: &HashMap<String, TermInfo>,
) -> IndexResult<()> {
    if terms.is_empty() {
        return Err(IndexError::InconsistentIndex(format!(
            "concept '{}' has no terms",
            concept_id
        )));
    }

    for term in terms {
        if term.trim().is_empty() {
            return Err(IndexError::InconsistentIndex(format!(
                "concept '{}' lists a blank term",
                concept_id
            )));
        }
        match index.get(term) {
            Some(info) if info.contains(concept_id) => {}
            Some(_) => {
                return Err(IndexError::InconsistentIndex(format!(
                    "concept '{}' lists term '{}' but the index entry for that term omits it",
                    concept_id, term
                )))
            }
            None => {
                return Err(IndexError::InconsistentIndex(format!(
                    "concept '{}' lists term '{}' which is missing from the index",
                    concept_id, term
                )))
            }
        }
    }

    Ok(())
}

/// Every concept of the entry must list the term
fn check_entry(term: &str, info: &TermInfo, concepts: &ConceptMap) -> IndexResult<()> {
    for concept_id in &info.concept_ids {
        match concepts.get(concept_id) {
            Some(terms) if terms.iter().any(|t| t == term) => {}
            Some(_) => {
                return Err(IndexError::InconsistentIndex(format!(
                    "index maps term '{}' to concept '{}' which does not list it",
                    term, concept_id
                )))
            }
            None => {
                return Err(IndexError::InconsistentIndex(format!(
                    "index maps term '{}' to unknown concept '{}'",
                    term, concept_id
                )))
            }
        }
    }

    Ok(())
}
