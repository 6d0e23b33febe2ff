//! Shared errors and configuration for Income Lens.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error types with HTTP status mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
