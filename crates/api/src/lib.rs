//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - JSON error responses
//! - Shared application state

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::Router;
use incomelens_core::session::CompanySession;
use incomelens_market::{ProfileCache, StatementSource};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream supplier of statements and profiles.
    pub source: Arc<dyn StatementSource>,
    /// Company profile cache.
    pub profiles: ProfileCache,
    /// The currently loaded company dataset.
    pub session: CompanySession,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
