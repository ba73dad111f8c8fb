//! Data-loading layer for the thesaurus files
//!
//! Reads the master thesaurus and its inverted index from JSON, derives and
//! writes the inverted index, and resolves file locations.

mod config;
mod loader;

pub use config::{ThesaurusConfig, DEFAULT_INDEX_FILE, DEFAULT_THESAURUS_FILE};
pub use loader::{
    build_inverted_index, load_concept_map, load_inverted_index, load_term_index,
    write_inverted_index,
};

use crate::index::IndexError;
use crate::utils::AtomicError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or writing thesaurus files
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Index(IndexError),
    Write(AtomicError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Json(e) => write!(f, "JSON error: {}", e),
            StoreError::Index(e) => write!(f, "Index error: {}", e),
            StoreError::Write(e) => write!(f, "Write error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl From<IndexError> for StoreError {
    fn from(e: IndexError) -> Self {
        StoreError::Index(e)
    }
}

impl From<AtomicError> for StoreError {
    fn from(e: AtomicError) -> Self {
        StoreError::Write(e)
    }
}
