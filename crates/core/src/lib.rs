//! Core query logic for Income Lens.
//!
//! This crate contains pure logic with ZERO web or HTTP-client dependencies.
//!
//! # Modules
//!
//! - `statement` - Financial statement records and datasets
//! - `query` - Range filtering, field sorting and query parsing
//! - `session` - The currently loaded company dataset

pub mod query;
pub mod session;
pub mod statement;
