//! Term lookup and expansion endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{index_error_response, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{QueryPlan, TermInfo};

/// Response for a single term
#[derive(Debug, Serialize)]
pub struct TermDetail {
    pub term: String,
    #[serde(flatten)]
    pub info: TermInfo,
}

/// GET /api/terms/:term - Look up a term by exact match
pub async fn lookup_term(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> impl IntoResponse {
    // Path already percent-decodes the segment; match it as is
    match state.index.lookup(&term) {
        Ok(info) => {
            let detail = TermDetail {
                term,
                info: info.clone(),
            };
            (StatusCode::OK, Json(ApiResponse::new(detail))).into_response()
        }
        Err(e) => index_error_response(&e),
    }
}

/// Query parameters for expansion
#[derive(Debug, Deserialize)]
pub struct ExpandParams {
    /// Term to expand
    pub q: String,
    /// Restrict expansion to one concept
    pub concept: Option<String>,
}

/// GET /api/expand - Expand a term into a boolean query
///
/// Unknown terms fall back to a literal search. With `concept`, the term
/// must belong to that concept.
pub async fn expand_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpandParams>,
) -> impl IntoResponse {
    let term = params.q.trim();
    if term.is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let result = match params.concept.as_deref() {
        Some(concept_id) => state
            .index
            .expand_in_concept(term, concept_id)
            .map(QueryPlan::expanded),
        None => state.index.expand_query(term),
    };

    match result {
        Ok(plan) => (StatusCode::OK, Json(ApiResponse::new(plan))).into_response(),
        Err(e) => index_error_response(&e),
    }
}

/// Query parameters for the ambiguity listing
#[derive(Debug, Deserialize)]
pub struct AmbiguousParams {
    /// Maximum number of items to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    100
}

/// GET /api/ambiguous - List ambiguous terms with pagination
pub async fn list_ambiguous(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AmbiguousParams>,
) -> impl IntoResponse {
    let all = state.index.ambiguous_terms();
    let total = all.len();

    let terms: Vec<_> = all
        .into_iter()
        .skip(params.offset)
        .take(params.limit.min(1000))
        .collect();

    Json(ApiResponse::with_total(terms, total))
}
