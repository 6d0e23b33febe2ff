//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use incomelens_core::query::QueryError;
use incomelens_market::MarketError;
use incomelens_shared::AppError;
use serde_json::json;
use tracing::error;

/// Handler error rendered as `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Shorthand for a 400 response.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }

    /// Shorthand for a 404 response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }

    /// Shorthand for a 409 response.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self(AppError::Conflict(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err.into())
    }
}

impl From<MarketError> for ApiError {
    fn from(err: MarketError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
