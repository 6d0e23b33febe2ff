//! HTTP client for a Financial Modeling Prep style market data API.

use std::time::Duration;

use async_trait::async_trait;
use incomelens_core::statement::{Dataset, Record};
use incomelens_shared::config::UpstreamConfig;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::MarketError;
use super::source::{StatementSource, validate_symbol};

/// Market data client.
///
/// The API key is sent as a query parameter and never logged.
#[derive(Clone)]
pub struct FmpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    period: String,
}

impl FmpClient {
    /// Builds a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, MarketError> {
        if config.api_key.trim().is_empty() {
            return Err(MarketError::Configuration("api_key is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarketError::Configuration(e.without_url().to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            period: config.period.clone(),
        })
    }

    fn endpoint(&self, resource: &str, symbol: &str) -> String {
        format!("{}/api/v3/{resource}/{symbol}", self.base_url)
    }

    async fn get_json(&self, url: String, query: &[(&str, &str)]) -> Result<Value, MarketError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl StatementSource for FmpClient {
    async fn income_statements(&self, symbol: &str) -> Result<Dataset, MarketError> {
        let symbol = validate_symbol(symbol)?;
        let url = self.endpoint("income-statement", symbol);

        let payload = match self.get_json(url, &[("period", self.period.as_str())]).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(symbol, error = %e, "Failed to fetch income statement");
                return Err(e);
            }
        };

        let records = Record::parse_dataset(payload)?;
        debug!(symbol, periods = records.len(), "Fetched income statement");
        Ok(records)
    }

    async fn company_profile(&self, symbol: &str) -> Result<Option<Record>, MarketError> {
        let symbol = validate_symbol(symbol)?;
        let url = self.endpoint("profile", symbol);

        let payload = match self.get_json(url, &[]).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(symbol, error = %e, "Failed to fetch company profile");
                return Err(e);
            }
        };

        let profile = find_profile(Record::parse_dataset(payload)?, symbol);
        debug!(symbol, found = profile.is_some(), "Fetched company profile");
        Ok(profile)
    }
}

/// Picks the profile whose `symbol` field matches, ignoring surrounding whitespace.
fn find_profile(profiles: Dataset, symbol: &str) -> Option<Record> {
    profiles.into_iter().find(|profile| {
        profile
            .get("symbol")
            .and_then(Value::as_str)
            .is_some_and(|s| s.trim() == symbol)
    })
}
