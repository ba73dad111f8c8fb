//! REST API module for HTTP endpoints
//!
//! - `GET /api/terms/:term` - Look up a term
//! - `GET /api/expand?q=` - Expand a query (literal fallback)
//! - `GET /api/ambiguous` - List ambiguous terms
//! - `GET /api/concepts/:id` - Get a concept's synonyms
//! - `GET /api/stats` - Index statistics

pub mod concepts;
pub mod stats;
pub mod terms;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::index::IndexError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "AMBIGUOUS_TERM".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map an index error to a status code and error body
pub fn index_error_response(error: &IndexError) -> Response {
    let message = error.to_string();
    match error {
        IndexError::TermNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ApiError::not_found(message))).into_response()
        }
        IndexError::AmbiguousTerm { .. } => {
            (StatusCode::CONFLICT, Json(ApiError::ambiguous(message))).into_response()
        }
        IndexError::ConceptMismatch { .. } => {
            (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(message))).into_response()
        }
        IndexError::InconsistentIndex(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::internal(message))).into_response()
        }
    }
}
