use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use veracity_core::models::StoredValidation;

use crate::error::ApiError;
use crate::validations::responses::{RecentParams, RecentResponse};
use crate::AppState;

const DEFAULT_RECENT_LIMIT: usize = 20;
const MAX_RECENT_LIMIT: usize = 100;

pub async fn list_recent(
    State(state): State<AppState>,
    params: Result<Query<RecentParams>, QueryRejection>,
) -> Result<Json<RecentResponse>, ApiError> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);
    let store = state.store.clone();
    let data = tokio::task::spawn_blocking(move || store.recent(limit)).await??;
    let count = data.len();
    Ok(Json(RecentResponse { data, count }))
}

pub async fn get_validation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredValidation>, ApiError> {
    let store = state.store.clone();
    let lookup = id.clone();
    tokio::task::spawn_blocking(move || store.get(&lookup))
        .await??
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("validation {id} not found")))
}
