//! Income statement routes: loading a company and querying its statements.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use incomelens_core::query::{Query as StatementQuery, QueryEngine};
use incomelens_core::statement::Record;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::required_param;
use crate::{ApiError, AppState};

/// Creates the income statement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fetch-income", get(fetch_income))
        .route("/filter-sort-income", get(filter_sort_income))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for loading a company's income statement.
#[derive(Debug, Deserialize)]
pub struct FetchIncomeQuery {
    /// Ticker symbol.
    pub query: Option<String>,
}

/// Query parameters for filtering and sorting the loaded statement.
#[derive(Debug, Deserialize)]
pub struct FilterSortQuery {
    /// JSON query: `{"sort_field", "ascending", "fields": {name: [min, max]}}`.
    pub query: Option<String>,
    /// Symbol the caller expects to be loaded.
    pub symbol: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /fetch-income?query={symbol}
///
/// Replaces the loaded dataset with the company's statements.
async fn fetch_income(
    State(state): State<AppState>,
    Query(params): Query<FetchIncomeQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let symbol = required_param(params.query, "Symbol is required")?;

    let records = state.source.income_statements(&symbol).await?;
    let loaded = state.session.replace(&symbol, records).await;

    info!(
        symbol = loaded.symbol(),
        periods = loaded.records().len(),
        "Income statement loaded"
    );

    Ok(Json(loaded.records().to_vec()))
}

/// GET /filter-sort-income?query={json}&symbol={symbol}
///
/// Runs the query against the loaded dataset: filters first, then sorts.
async fn filter_sort_income(
    State(state): State<AppState>,
    Query(params): Query<FilterSortQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let raw = required_param(params.query, "Params required")?;
    let query = StatementQuery::parse(&raw)?;

    let Some(loaded) = state.session.current().await else {
        return Err(ApiError::not_found(
            "No income statement loaded; call /fetch-income first",
        ));
    };

    if let Some(expected) = params.symbol.as_deref().filter(|s| !s.trim().is_empty())
        && !loaded.is_for(expected)
    {
        return Err(ApiError::conflict(format!(
            "Loaded income statement belongs to {}, not {}",
            loaded.symbol(),
            expected.trim()
        )));
    }

    let result = QueryEngine::run(loaded.records(), &query).inspect_err(|e| {
        warn!(symbol = loaded.symbol(), error = %e, "Rejected income statement query");
    })?;

    debug!(
        symbol = loaded.symbol(),
        filters = query.filters.len(),
        sorted = query.sort.is_some(),
        matched = result.len(),
        "Income statement queried"
    );

    Ok(Json(result))
}
