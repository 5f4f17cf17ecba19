//! Mapping from domain errors to HTTP responses
//!
//! Validation and not-found outcomes are expected results, reported with
//! enough detail for the caller to resubmit. Storage failures surface as
//! opaque 500s and get logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pokedex_core::PokedexError;
use tracing::error;

#[derive(Debug)]
pub struct ApiError(pub PokedexError);

impl From<PokedexError> for ApiError {
    fn from(e: PokedexError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PokedexError::MissingFields { fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": "missing required fields",
                    "fields": fields,
                })),
            )
                .into_response(),
            PokedexError::InvalidField { field, reason } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": reason,
                    "fields": [field],
                })),
            )
                .into_response(),
            PokedexError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": format!("record not found: {}", id),
                })),
            )
                .into_response(),
            PokedexError::Storage(msg) => {
                error!("storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "storage error" })),
                )
                    .into_response()
            }
        }
    }
}
