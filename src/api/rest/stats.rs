//! Statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::index::ExpansionPolicy;
use crate::types::IndexStats;

/// Response for GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub policy: ExpansionPolicy,
    #[serde(flatten)]
    pub stats: IndexStats,
}

/// GET /api/stats - Index statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = StatsResponse {
        policy: state.index.policy(),
        stats: state.index.stats(),
    };
    Json(ApiResponse::new(response))
}
