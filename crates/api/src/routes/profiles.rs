//! Company profile lookup.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use incomelens_core::statement::Record;
use serde::Deserialize;
use tracing::info;

use super::required_param;
use crate::{ApiError, AppState};

/// Query parameters for a profile lookup.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Ticker symbol.
    pub query: Option<String>,
}

/// Creates the profile routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/fetch-data", get(fetch_data))
}

/// GET /fetch-data?query={symbol}
async fn fetch_data(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<Record>, ApiError> {
    let symbol = required_param(params.query, "Symbol is required")?;

    match state
        .profiles
        .get_or_fetch(state.source.as_ref(), &symbol)
        .await?
    {
        Some(profile) => {
            info!(symbol = %symbol, "Fetched company profile");
            Ok(Json(Record::clone(&profile)))
        }
        None => Err(ApiError::not_found("Company not found")),
    }
}
