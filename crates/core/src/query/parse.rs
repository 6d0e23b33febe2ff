//! Parsing of caller-supplied query descriptions.
//!
//! Accepted shape:
//!
//! ```json
//! { "sort_field": "revenue", "ascending": false,
//!   "fields": { "revenue": [1000, 5000], "date": [2019, 2023] } }
//! ```

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::error::QueryError;
use super::types::{Query, RangeFilter, SortSpec};
use super::value::number_to_decimal;
use crate::statement::json_kind;

const SORT_FIELD_KEY: &str = "sort_field";
const ASCENDING_KEY: &str = "ascending";
const FIELDS_KEY: &str = "fields";

impl Query {
    /// Parses a query from its JSON text.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| QueryError::MalformedQuery(format!("invalid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Builds a query from an already decoded JSON value.
    ///
    /// Unknown keys are ignored and `null` is treated as absent.
    pub fn from_value(value: &Value) -> Result<Self, QueryError> {
        let Value::Object(params) = value else {
            return Err(QueryError::MalformedQuery(format!(
                "expected a JSON object, got {}",
                json_kind(value)
            )));
        };

        let sort_field = match present(params, SORT_FIELD_KEY) {
            None => None,
            Some(Value::String(field)) => Some(field.as_str()),
            Some(other) => return Err(wrong_kind(SORT_FIELD_KEY, "a string", other)),
        };

        let ascending = match present(params, ASCENDING_KEY) {
            None => true,
            Some(Value::Bool(ascending)) => *ascending,
            Some(other) => return Err(wrong_kind(ASCENDING_KEY, "a boolean", other)),
        };

        let filters = match present(params, FIELDS_KEY) {
            None => Vec::new(),
            Some(Value::Object(ranges)) => ranges
                .iter()
                .map(|(field, bounds)| parse_range(field, bounds))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => return Err(wrong_kind(FIELDS_KEY, "an object", other)),
        };

        let sort = sort_field
            .filter(|field| !field.is_empty())
            .map(|field| SortSpec {
                field: field.to_string(),
                ascending,
            });

        Ok(Self { filters, sort })
    }
}

fn present<'a>(params: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    params.get(key).filter(|v| !v.is_null())
}

fn wrong_kind(key: &str, expected: &str, found: &Value) -> QueryError {
    QueryError::MalformedQuery(format!(
        "'{key}' must be {expected}, got {}",
        json_kind(found)
    ))
}

fn parse_range(field: &str, bounds: &Value) -> Result<RangeFilter, QueryError> {
    let malformed = || {
        QueryError::MalformedQuery(format!(
            "'{FIELDS_KEY}.{field}' must be a [min, max] pair"
        ))
    };

    let Value::Array(pair) = bounds else {
        return Err(malformed());
    };
    let [min, max] = pair.as_slice() else {
        return Err(malformed());
    };

    Ok(RangeFilter::new(
        field,
        parse_bound(field, min)?,
        parse_bound(field, max)?,
    ))
}

fn parse_bound(field: &str, bound: &Value) -> Result<Option<Decimal>, QueryError> {
    match bound {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(number_to_decimal(n))),
        other => Err(QueryError::MalformedQuery(format!(
            "bounds for '{field}' must be numbers, got {}",
            json_kind(other)
        ))),
    }
}
