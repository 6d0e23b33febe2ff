//! The currently loaded company dataset.
//!
//! There is exactly one slot: fetching a new company replaces it wholesale.
//! Callers share it through a cloned [`CompanySession`] handle instead of a
//! process-wide global, and each query works on one snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::statement::{Dataset, Record};

/// Statements of one company, as last fetched.
#[derive(Debug)]
pub struct LoadedStatements {
    symbol: String,
    records: Dataset,
}

impl LoadedStatements {
    /// Ticker symbol the records belong to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Records in upstream order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns true if `symbol` names the loaded company (ignoring case and
    /// surrounding whitespace).
    #[must_use]
    pub fn is_for(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol.trim())
    }
}

/// Handle to the single "current dataset" slot.
#[derive(Debug, Clone, Default)]
pub struct CompanySession {
    slot: Arc<RwLock<Option<Arc<LoadedStatements>>>>,
}

impl CompanySession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded dataset and returns the new snapshot.
    pub async fn replace(&self, symbol: &str, records: Dataset) -> Arc<LoadedStatements> {
        let loaded = Arc::new(LoadedStatements {
            symbol: symbol.trim().to_string(),
            records,
        });
        *self.slot.write().await = Some(Arc::clone(&loaded));
        loaded
    }

    /// Returns the current snapshot, if any company has been loaded.
    pub async fn current(&self) -> Option<Arc<LoadedStatements>> {
        self.slot.read().await.clone()
    }
}
