//! Range filtering over statement records.

use rust_decimal::Decimal;

use super::error::QueryError;
use super::types::RangeFilter;
use super::value;
use crate::statement::{DATE_FIELD, Record};

/// Applies range filters to a dataset.
pub struct FilterEngine;

impl FilterEngine {
    /// Returns the records that satisfy every active filter, in input order.
    ///
    /// Filters missing a bound are ignored. With no active filters the
    /// dataset is returned unchanged.
    pub fn apply(records: &[Record], filters: &[RangeFilter]) -> Result<Vec<Record>, QueryError> {
        let active: Vec<(&str, Decimal, Decimal)> = filters
            .iter()
            .filter_map(|f| f.bounds().map(|(min, max)| (f.field.as_str(), min, max)))
            .collect();

        if active.is_empty() {
            return Ok(records.to_vec());
        }

        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if Self::matches_all(record, &active)? {
                kept.push(record.clone());
            }
        }

        Ok(kept)
    }

    /// Every filter is evaluated, so a value that cannot be compared fails
    /// the call even when another filter already excludes the record.
    fn matches_all(record: &Record, active: &[(&str, Decimal, Decimal)]) -> Result<bool, QueryError> {
        let mut keep = true;
        for &(field, min, max) in active {
            keep &= Self::in_range(record, field, min, max)?;
        }
        Ok(keep)
    }

    fn in_range(record: &Record, field: &str, min: Decimal, max: Decimal) -> Result<bool, QueryError> {
        let actual = if field == DATE_FIELD {
            // Undated records count as year 0.
            match record.get(DATE_FIELD) {
                Some(date) => Decimal::from(value::year(DATE_FIELD, date)?),
                None => Decimal::ZERO,
            }
        } else {
            match record.get(field) {
                Some(raw) => value::numeric(field, raw)?,
                // A missing value ranks above every finite upper bound.
                None => return Ok(false),
            }
        };

        Ok(min <= actual && actual <= max)
    }
}
