//! Record CRUD handlers

use crate::handlers::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pokedex_core::{Record, RecordDraft};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    records: Vec<Record>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<RecordListResponse>, ApiError> {
    let records = state.catalog.list().await?;
    Ok(Json(RecordListResponse { records }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.catalog.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<RecordDraft>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let record = state.catalog.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.catalog.update(id, &draft).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
