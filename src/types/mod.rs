//! Data types for the medical thesaurus
//!
//! This module contains the core data structures shared by the index,
//! the data-loading layer and the server surfaces.

mod concept;
mod expansion;
mod stats;
mod term;

pub use concept::{Concept, ConceptMap, InvertedIndex};
pub use expansion::{ExpansionResult, QueryPlan};
pub use stats::IndexStats;
pub use term::{AmbiguousTerm, TermInfo};

/// Result type for tool and server operations
pub type ThesaurusResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
