//! Sales analysis entry points.
//!
//! The pipeline runs validate -> aggregate -> rank/report in one call and
//! either returns the complete report or an error.

use salesrank_shared::config::ReportConfig;
use salesrank_shared::types::RoundingMode;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::aggregate::aggregate;
use super::error::AnalysisError;
use super::ranking::{ReportRow, rank_sellers};
use super::strategy::{
    BonusStrategy, RevenueStrategy, SimpleRevenue, StrategyBinding, StrategyRegistry, TieredBonus,
};
use super::types::Dataset;
use super::validation::{validate_dataset, validate_dataset_value, validate_options};

/// Strategies and report settings for one analysis run.
#[derive(Debug)]
pub struct AnalysisOptions {
    /// Revenue strategy slot.
    pub calculate_revenue: Option<StrategyBinding<dyn RevenueStrategy>>,
    /// Bonus strategy slot.
    pub calculate_bonus: Option<StrategyBinding<dyn BonusStrategy>>,
    /// Maximum number of top products per seller.
    pub top_products_limit: usize,
    /// Decimal places kept for money fields.
    pub decimal_places: u32,
    /// Rounding rule for money fields.
    pub rounding: RoundingMode,
}

impl AnalysisOptions {
    /// Options with both strategy slots empty and default report settings.
    #[must_use]
    pub fn empty() -> Self {
        let config = ReportConfig::default();
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
            top_products_limit: config.top_products_limit,
            decimal_places: config.decimal_places,
            rounding: config.rounding,
        }
    }

    /// Builds options from configuration, resolving strategy names.
    ///
    /// Unknown names are kept as unresolved bindings and rejected when the
    /// pipeline validates its options.
    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        let registry = StrategyRegistry::from_config(config);
        Self {
            calculate_revenue: registry.revenue(&config.revenue_strategy),
            calculate_bonus: registry.bonus(&config.bonus_strategy),
            top_products_limit: config.top_products_limit,
            decimal_places: config.decimal_places,
            rounding: config.rounding,
        }
    }

    /// Replaces the revenue strategy.
    #[must_use]
    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(StrategyBinding::revenue(strategy));
        self
    }

    /// Replaces the bonus strategy.
    #[must_use]
    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(StrategyBinding::bonus(strategy));
        self
    }
}

impl Default for AnalysisOptions {
    /// Simple discounted revenue and the 15/10/0/5 tiered bonus.
    fn default() -> Self {
        Self::empty()
            .with_revenue(SimpleRevenue)
            .with_bonus(TieredBonus::default())
    }
}

/// Computes the per-seller sales report.
///
/// Rows are ordered by descending profit; equal profits keep seller input
/// order. That order is also the rank passed to the bonus strategy.
///
/// # Errors
///
/// Returns `AnalysisError` if the dataset or options are invalid, or a
/// purchase record references an unknown seller or product.
#[instrument(
    skip_all,
    fields(
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        records = dataset.purchase_records.len(),
    )
)]
pub fn analyze_sales_data(
    dataset: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<ReportRow>, AnalysisError> {
    validate_dataset(dataset)?;
    let strategies = validate_options(options)?;
    debug!("Validated dataset and options");

    let accumulators = aggregate(dataset, strategies.revenue)?;
    for idle in accumulators.iter().filter(|a| a.sales_count == 0) {
        warn!(seller_id = %idle.id, "Seller has no purchase records");
    }

    let ranked = rank_sellers(accumulators, strategies.bonus, options.top_products_limit)?;
    let rows: Vec<ReportRow> = ranked
        .iter()
        .map(|seller| seller.to_report_row(options.decimal_places, options.rounding))
        .collect();

    info!(rows = rows.len(), "Sales report generated");
    Ok(rows)
}

/// Computes the sales report from an untyped JSON dataset.
///
/// Checks that the value is an object with non-empty `sellers`, `products`
/// and `purchase_records` arrays, then runs [`analyze_sales_data`].
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDataset` for malformed input, plus every
/// error [`analyze_sales_data`] can return.
pub fn analyze_sales_json(
    value: &Value,
    options: &AnalysisOptions,
) -> Result<Vec<ReportRow>, AnalysisError> {
    let dataset = validate_dataset_value(value)?;
    analyze_sales_data(&dataset, options)
}
