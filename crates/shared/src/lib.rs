//! Shared types, errors, and configuration for Kontera.
//!
//! This crate provides common types used across all other crates:
//! - Period types (`YearMonth`, fiscal-year helpers)
//! - Amount rounding helpers with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
