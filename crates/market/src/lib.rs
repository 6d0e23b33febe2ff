//! Market data access for Income Lens.
//!
//! This crate provides:
//! - The `StatementSource` seam the API fetches through
//! - `FmpClient`, an HTTP implementation against a Financial Modeling Prep style API
//! - `ProfileCache`, an in-memory cache of company profiles

pub mod cache;
pub mod client;
pub mod error;
pub mod source;

pub use cache::ProfileCache;
pub use client::FmpClient;
pub use error::MarketError;
pub use source::{StatementSource, validate_symbol};
