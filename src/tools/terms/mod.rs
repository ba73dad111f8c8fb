//! Term tools for inspecting the index

mod get_concept;
mod index_stats;
mod list_ambiguous_terms;
mod lookup_term;

pub use get_concept::GetConceptTool;
pub use index_stats::IndexStatsTool;
pub use list_ambiguous_terms::ListAmbiguousTermsTool;
pub use lookup_term::LookupTermTool;
