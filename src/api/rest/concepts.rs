//! Concept endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// GET /api/concepts/:id - Get the synonyms of a concept
pub async fn get_concept(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.index.get_concept(&id) {
        Some(concept) => (StatusCode::OK, Json(ApiResponse::new(concept))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Concept '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
