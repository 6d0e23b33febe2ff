//! Field sorting over statement records.

use rust_decimal::Decimal;
use serde_json::Value;

use super::error::QueryError;
use super::types::SortSpec;
use super::value;
use crate::statement::{DATE_FIELD, Record, json_kind};

/// Comparable key extracted from one record.
///
/// Variants never compare against each other: a dataset is only sorted once
/// every key has the same kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(Decimal),
    Text(String),
    Null,
}

impl SortKey {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Null => "null",
        }
    }
}

/// Orders a dataset by one field.
pub struct SortEngine;

impl SortEngine {
    /// Stable sort of `records` by `spec.field`.
    ///
    /// Descending order is the ascending result reversed, so records with
    /// equal keys come out in reverse input order. An empty input is
    /// returned as-is without looking at the field.
    pub fn apply(records: Vec<Record>, spec: &SortSpec) -> Result<Vec<Record>, QueryError> {
        let Some(first) = records.first() else {
            return Ok(records);
        };
        if !first.contains(&spec.field) {
            return Err(QueryError::InvalidField(spec.field.clone()));
        }

        let mut keyed = records
            .into_iter()
            .map(|record| Ok((Self::key(&record, &spec.field)?, record)))
            .collect::<Result<Vec<_>, QueryError>>()?;

        Self::ensure_comparable(&spec.field, &keyed)?;

        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut sorted: Vec<Record> = keyed.into_iter().map(|(_, record)| record).collect();
        if !spec.ascending {
            sorted.reverse();
        }

        Ok(sorted)
    }

    fn key(record: &Record, field: &str) -> Result<SortKey, QueryError> {
        let raw = record
            .get(field)
            .ok_or_else(|| QueryError::InvalidField(field.to_string()))?;

        match raw {
            Value::String(_) if field == DATE_FIELD => {
                Ok(SortKey::Number(Decimal::from(value::year(field, raw)?)))
            }
            Value::String(text) => Ok(SortKey::Text(text.clone())),
            Value::Number(_) | Value::Bool(_) => Ok(SortKey::Number(value::numeric(field, raw)?)),
            Value::Null => Ok(SortKey::Null),
            Value::Array(_) | Value::Object(_) => Err(QueryError::TypeMismatch {
                field: field.to_string(),
                expected: "a scalar value",
                found: json_kind(raw),
            }),
        }
    }

    /// A single record needs no comparison; otherwise all keys must share one
    /// orderable kind.
    fn ensure_comparable(field: &str, keyed: &[(SortKey, Record)]) -> Result<(), QueryError> {
        let [(first, _), rest @ ..] = keyed else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }

        let mismatch = |expected: &'static str, found: &SortKey| QueryError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: found.kind(),
        };

        if *first == SortKey::Null {
            return Err(mismatch("an orderable value", first));
        }
        for (key, _) in rest {
            if std::mem::discriminant(key) != std::mem::discriminant(first) {
                return Err(mismatch(first.kind(), key));
            }
        }

        Ok(())
    }
}
