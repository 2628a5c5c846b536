//! Core business logic for Salesrank.
//!
//! This crate contains pure business logic with ZERO file, network or CLI
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `sales` - Per-seller revenue, profit, ranking and bonus reporting

pub mod sales;

pub use sales::{
    AnalysisError, AnalysisOptions, Dataset, ReportRow, analyze_sales_data, analyze_sales_json,
};
