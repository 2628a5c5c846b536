//! Shared types, errors, and configuration for Salesrank.
//!
//! This crate provides common types used across all other crates:
//! - Typed identifiers for sellers and products
//! - Money rounding with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogFormat, LoggingConfig, ReportConfig};
pub use error::{AppError, AppResult};
