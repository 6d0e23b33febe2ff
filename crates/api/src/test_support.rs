//! Helpers for exercising the router in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use incomelens_core::session::CompanySession;
use incomelens_core::statement::{Dataset, Record};
use incomelens_market::{MarketError, ProfileCache, StatementSource};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{AppState, create_router};

/// In-memory statement source.
pub struct StubSource {
    statements: HashMap<String, Dataset>,
    profiles: HashMap<String, Record>,
    failing: bool,
}

impl Default for StubSource {
    fn default() -> Self {
        let mut statements = HashMap::new();
        statements.insert(
            "AAPL".to_string(),
            Record::parse_dataset(json!([
                {"symbol": "AAPL", "date": "2023-09-30", "revenue": 383, "netIncome": 97},
                {"symbol": "AAPL", "date": "2022-09-24", "revenue": 394, "netIncome": 100},
                {"symbol": "AAPL", "date": "2021-09-25", "revenue": 366, "netIncome": 95},
                {"symbol": "AAPL", "date": "2020-09-26", "revenue": 275, "netIncome": 57},
            ]))
            .unwrap(),
        );
        statements.insert(
            "MSFT".to_string(),
            Record::parse_dataset(json!([
                {"symbol": "MSFT", "date": "2023-06-30", "revenue": 212, "netIncome": 72},
            ]))
            .unwrap(),
        );
        statements.insert("NEWCO".to_string(), Vec::new());

        let mut profiles = HashMap::new();
        profiles.insert(
            "AAPL".to_string(),
            Record::try_from(json!({"symbol": "AAPL", "companyName": "Apple Inc."})).unwrap(),
        );

        Self {
            statements,
            profiles,
            failing: false,
        }
    }
}

impl StubSource {
    /// A source whose every call fails at the transport level.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl StatementSource for StubSource {
    async fn income_statements(&self, symbol: &str) -> Result<Dataset, MarketError> {
        if self.failing {
            return Err(MarketError::Http("connection refused".to_string()));
        }
        self.statements
            .get(symbol.trim())
            .cloned()
            .ok_or(MarketError::UpstreamStatus(404))
    }

    async fn company_profile(&self, symbol: &str) -> Result<Option<Record>, MarketError> {
        if self.failing {
            return Err(MarketError::Http("connection refused".to_string()));
        }
        Ok(self.profiles.get(symbol.trim()).cloned())
    }
}

/// Builds the router around `source` and returns it with its state.
pub fn test_app(source: StubSource) -> (Router, AppState) {
    let state = AppState {
        source: Arc::new(source),
        profiles: ProfileCache::with_config(100, 60),
        session: CompanySession::new(),
    };
    (create_router(state.clone()), state)
}

/// Sends a GET request and decodes the JSON body (`Value::Null` if the body is not JSON).
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Percent-encodes a query-string value.
pub fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
