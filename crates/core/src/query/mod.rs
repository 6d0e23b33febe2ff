//! Statement queries.
//!
//! A query narrows the loaded dataset with inclusive range filters and then
//! optionally orders the survivors by a single field:
//! - Filtering (`FilterEngine`)
//! - Sorting (`SortEngine`)
//! - Parsing and orchestration (`Query`, `QueryEngine`)

pub mod engine;
pub mod error;
pub mod filter;
pub mod parse;
pub mod sort;
pub mod types;
mod value;

#[cfg(test)]
mod tests;

pub use engine::QueryEngine;
pub use error::QueryError;
pub use filter::FilterEngine;
pub use sort::SortEngine;
pub use types::{Query, RangeFilter, SortSpec};
