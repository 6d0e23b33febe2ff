//! Market data error types.

use incomelens_core::statement::RecordError;
use incomelens_shared::AppError;
use thiserror::Error;

/// Errors raised while talking to the market data provider.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Symbol is empty or contains characters a ticker cannot have.
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("upstream request failed: {0}")]
    Http(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream payload did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Decode(String),

    /// Client could not be built from configuration.
    #[error("market client configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for MarketError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key.
        let err = err.without_url();
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<RecordError> for MarketError {
    fn from(err: RecordError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::InvalidSymbol(_) => Self::Validation(err.to_string()),
            MarketError::UpstreamStatus(_) => Self::NotFound(err.to_string()),
            MarketError::Http(_) | MarketError::Decode(_) => Self::ExternalService(err.to_string()),
            MarketError::Configuration(_) => Self::Internal(err.to_string()),
        }
    }
}
