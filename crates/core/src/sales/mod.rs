//! Per-seller sales performance reporting.
//!
//! This module implements the sales analysis pipeline:
//! - Input validation (dataset shape, value ranges, strategies)
//! - Aggregation of purchase records into seller accumulators
//! - Ranking by profit with bonus assignment and top products
//! - Pluggable revenue and bonus strategies

pub mod aggregate;
pub mod error;
pub mod ranking;
pub mod service;
pub mod strategy;
pub mod types;
pub mod validation;


#[cfg(test)]
mod service_props;

pub use aggregate::{SellerAccumulator, aggregate};
pub use error::{AnalysisError, StrategySlot};
pub use ranking::{RankedSeller, ReportRow, ReportSummary, TopProduct, rank_sellers, top_products};
pub use service::{AnalysisOptions, analyze_sales_data, analyze_sales_json};
pub use strategy::{
    BonusStrategy, GrossRevenue, NoBonus, RevenueStrategy, SimpleRevenue, StrategyBinding,
    StrategyRegistry, TieredBonus,
};
pub use types::{Dataset, LineItem, Product, PurchaseRecord, Seller};
pub use validation::{validate_dataset, validate_dataset_value, validate_options};
