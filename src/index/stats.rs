//! Index statistics collection

use std::collections::HashMap;

use crate::types::{ConceptMap, IndexStats, TermInfo};

/// Collect statistics over a validated index
pub(super) fn collect(concepts: &ConceptMap, inverted: &HashMap<String, TermInfo>) -> IndexStats {
    let total_terms = inverted.len();
    let ambiguous_terms = inverted.values().filter(|info| info.is_ambiguous).count();

    // Lexically first term among those with the most concepts
    let most_ambiguous = inverted
        .iter()
        .max_by(|(ta, a), (tb, b)| {
            a.concept_count()
                .cmp(&b.concept_count())
                .then_with(|| tb.cmp(ta))
        })
        .map(|(term, info)| (term.clone(), info.concept_count()));

    let term_counts: Vec<usize> = concepts.values().map(Vec::len).collect();
    let total_concepts = term_counts.len();
    let avg_terms_per_concept = if total_concepts > 0 {
        term_counts.iter().sum::<usize>() as f64 / total_concepts as f64
    } else {
        0.0
    };

    IndexStats {
        total_concepts,
        total_terms,
        ambiguous_terms,
        unambiguous_terms: total_terms - ambiguous_terms,
        max_concepts_per_term: most_ambiguous.as_ref().map(|(_, n)| *n).unwrap_or(0),
        most_ambiguous_term: most_ambiguous.map(|(term, _)| term),
        min_terms_per_concept: term_counts.iter().copied().min().unwrap_or(0),
        max_terms_per_concept: term_counts.iter().copied().max().unwrap_or(0),
        avg_terms_per_concept,
    }
}
