//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::index::TermIndex;

/// State shared by all request handlers
///
/// The index is immutable, so handlers read it without locking.
pub struct AppState {
    pub index: Arc<TermIndex>,
}

impl AppState {
    pub fn new(index: Arc<TermIndex>) -> Self {
        Self { index }
    }
}
