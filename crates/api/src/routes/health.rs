//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Symbol of the company whose statements are loaded, if any.
    pub loaded_symbol: Option<String>,
    /// Number of statements in the loaded dataset.
    pub loaded_records: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let loaded = state.session.current().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        loaded_symbol: loaded.as_ref().map(|l| l.symbol().to_string()),
        loaded_records: loaded.map_or(0, |l| l.records().len()),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
