//! Errors raised by the term index

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur when building or querying a term index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The queried term is not in the inverted index
    TermNotFound(String),
    /// The concept map and inverted index are not exact transposes
    InconsistentIndex(String),
    /// Expansion of an ambiguous term was refused by the policy
    AmbiguousTerm {
        term: String,
        concept_ids: Vec<String>,
    },
    /// The term is not listed under the requested concept
    ConceptMismatch { term: String, concept_id: String },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::TermNotFound(term) => write!(f, "Term not found: '{}'", term),
            IndexError::InconsistentIndex(msg) => write!(f, "Inconsistent index: {}", msg),
            IndexError::AmbiguousTerm { term, concept_ids } => write!(
                f,
                "Ambiguous term '{}' belongs to {} concepts: {}",
                term,
                concept_ids.len(),
                concept_ids.join(", ")
            ),
            IndexError::ConceptMismatch { term, concept_id } => {
                write!(f, "Term '{}' is not listed under concept '{}'", term, concept_id)
            }
        }
    }
}

impl std::error::Error for IndexError {}

impl IndexError {
    /// Whether the caller can recover (every query-time error is recoverable)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, IndexError::InconsistentIndex(_))
    }
}
