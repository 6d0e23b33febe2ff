//! Query orchestration: filter, then sort.

use super::error::QueryError;
use super::filter::FilterEngine;
use super::sort::SortEngine;
use super::types::Query;
use crate::statement::Record;

/// Runs parsed queries against a dataset.
pub struct QueryEngine;

impl QueryEngine {
    /// Filters `records`, then sorts the survivors if the query asks for it.
    ///
    /// Either the full result or an error is returned, never a partial result.
    pub fn run(records: &[Record], query: &Query) -> Result<Vec<Record>, QueryError> {
        let filtered = FilterEngine::apply(records, &query.filters)?;

        match &query.sort {
            Some(spec) => SortEngine::apply(filtered, spec),
            None => Ok(filtered),
        }
    }

    /// Parses the JSON query text and runs it.
    pub fn run_raw(records: &[Record], raw: &str) -> Result<Vec<Record>, QueryError> {
        let query = Query::parse(raw)?;
        Self::run(records, &query)
    }
}
