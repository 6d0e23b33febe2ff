//! Company profile caching using Moka.
//!
//! Profiles rarely change, so a found profile is kept for the configured
//! time-to-live instead of hitting the provider on every lookup.

use std::sync::Arc;
use std::time::Duration;

use incomelens_core::statement::Record;
use incomelens_shared::config::CacheConfig;
use moka::future::Cache;
use tracing::debug;

use super::error::MarketError;
use super::source::{StatementSource, validate_symbol};

/// Cache of company profiles keyed by trimmed symbol.
///
/// Only found profiles are cached; unknown symbols are looked up again next
/// time. Cloning shares the underlying cache.
#[derive(Clone)]
pub struct ProfileCache {
    cache: Cache<String, Arc<Record>>,
}

impl ProfileCache {
    /// Creates a cache from configuration.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_config(config.profile_capacity, config.profile_ttl_secs)
    }

    /// Creates a cache with an explicit capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns the profile of `symbol`, fetching it from `source` on a miss.
    pub async fn get_or_fetch(
        &self,
        source: &dyn StatementSource,
        symbol: &str,
    ) -> Result<Option<Arc<Record>>, MarketError> {
        let symbol = validate_symbol(symbol)?;

        if let Some(profile) = self.cache.get(symbol).await {
            debug!(symbol, "Profile cache hit");
            return Ok(Some(profile));
        }

        let Some(profile) = source.company_profile(symbol).await? else {
            return Ok(None);
        };

        let profile = Arc::new(profile);
        self.cache
            .insert(symbol.to_string(), Arc::clone(&profile))
            .await;
        Ok(Some(profile))
    }
}
