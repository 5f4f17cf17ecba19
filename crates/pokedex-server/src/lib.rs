//! Pokédex Record Server
//!
//! JSON CRUD service over a single `records` table. All persistence goes
//! through the `RecordStore` port, so handlers stay driver-agnostic: the
//! production binary injects the SQLite adapter, tests inject the
//! in-memory one.

pub mod config;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::Catalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Builds the full router over an already-wired state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/records",
            get(handlers::records::list).post(handlers::records::create),
        )
        .route(
            "/records/:id",
            get(handlers::records::get)
                .put(handlers::records::update)
                .delete(handlers::records::delete),
        )
}
