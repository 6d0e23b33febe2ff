//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod income;
pub mod profiles;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(profiles::routes())
        .merge(income::routes())
}

/// Returns the trimmed `?query=` value, or a 400 with `message` when it is
/// absent or blank.
pub(crate) fn required_param(value: Option<String>, message: &str) -> Result<String, crate::ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| crate::ApiError::validation(message))
}
