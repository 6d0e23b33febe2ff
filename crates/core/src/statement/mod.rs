//! Financial statement records.

pub mod record;

pub use record::{DATE_FIELD, Dataset, Record, RecordError, json_kind};
