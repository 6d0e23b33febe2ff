//! Statement records as received from the market data provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Name of the reporting-date field. Its values are `YYYY-MM-DD` strings and
/// are filtered and sorted by year.
pub const DATE_FIELD: &str = "date";

/// An ordered sequence of records for one company.
pub type Dataset = Vec<Record>;

/// Errors raised while turning raw JSON into records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The payload was not a JSON array.
    #[error("Expected an array of records, got {0}")]
    NotAnArray(&'static str),

    /// An element of the payload was not a JSON object.
    #[error("Record {index} is not an object (got {kind})")]
    NotAnObject {
        /// Position of the offending element.
        index: usize,
        /// JSON kind found instead.
        kind: &'static str,
    },
}

/// One reporting period: a mapping from field name to scalar value.
///
/// Records are never modified after construction; queries only select and
/// reorder them, so they serialize back exactly as they were received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates a record from a JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns true if the record carries `field` (even as `null`).
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Parses a JSON array of objects into a dataset.
    pub fn parse_dataset(value: Value) -> Result<Dataset, RecordError> {
        let Value::Array(items) = value else {
            return Err(RecordError::NotAnArray(json_kind(&value)));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(Self(fields)),
                other => Err(RecordError::NotAnObject {
                    index,
                    kind: json_kind(&other),
                }),
            })
            .collect()
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RecordError::NotAnObject {
                index: 0,
                kind: json_kind(&other),
            }),
        }
    }
}

/// Human-readable name of a JSON value's kind, used in error messages.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
