//! Ranks sellers by profit and projects report rows.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use salesrank_shared::types::{RoundingMode, SellerId, Sku, round_money};
use serde::{Deserialize, Serialize};

use super::aggregate::SellerAccumulator;
use super::error::AnalysisError;
use super::strategy::BonusStrategy;

/// Units sold of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product sku.
    pub sku: Sku,
    /// Units sold.
    pub quantity: u64,
}

/// A seller after ranking: the frozen accumulator plus its derived fields.
#[derive(Debug, Clone)]
pub struct RankedSeller {
    /// Frozen totals.
    pub seller: SellerAccumulator,
    /// Unrounded bonus.
    pub bonus: Decimal,
    /// Best-selling products, most units first.
    pub top_products: Vec<TopProduct>,
}

/// One row of the sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Seller ID.
    pub seller_id: SellerId,
    /// Seller display name.
    pub name: String,
    /// Revenue, rounded.
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    /// Profit, rounded.
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    /// Number of receipts.
    pub sales_count: usize,
    /// Best-selling products.
    pub top_products: Vec<TopProduct>,
    /// Bonus, rounded.
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

/// Returns at most `limit` products ordered by descending quantity.
///
/// Equal quantities keep their first-seen order.
#[must_use]
pub fn top_products(products_sold: &IndexMap<Sku, u64>, limit: usize) -> Vec<TopProduct> {
    let mut top: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.clone(),
            quantity: *quantity,
        })
        .collect();
    top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top.truncate(limit);
    top
}

/// Sorts sellers by descending profit and assigns bonus and top products.
///
/// The sort is stable, so sellers with equal profit keep their input order.
/// The bonus strategy sees each seller at its post-sort rank, and the
/// returned sellers are in rank order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDataset` if a bonus does not fit in the
/// decimal range.
pub fn rank_sellers(
    mut accumulators: Vec<SellerAccumulator>,
    bonus: &dyn BonusStrategy,
    top_products_limit: usize,
) -> Result<Vec<RankedSeller>, AnalysisError> {
    accumulators.sort_by(|a, b| b.profit.cmp(&a.profit));
    let total = accumulators.len();

    accumulators
        .into_iter()
        .enumerate()
        .map(|(rank, seller)| {
            let amount = bonus.compute(rank, total, &seller).ok_or_else(|| {
                AnalysisError::InvalidDataset(format!(
                    "bonus of seller {} overflows decimal range",
                    seller.id
                ))
            })?;
            Ok(RankedSeller {
                bonus: amount,
                top_products: top_products(&seller.products_sold, top_products_limit),
                seller,
            })
        })
        .collect()
}

impl RankedSeller {
    /// Projects this seller into a report row, rounding money fields.
    #[must_use]
    pub fn to_report_row(&self, decimal_places: u32, rounding: RoundingMode) -> ReportRow {
        ReportRow {
            seller_id: self.seller.id.clone(),
            name: self.seller.name.clone(),
            revenue: round_money(self.seller.revenue, decimal_places, rounding),
            profit: round_money(self.seller.profit, decimal_places, rounding),
            sales_count: self.seller.sales_count,
            top_products: self.top_products.clone(),
            bonus: round_money(self.bonus, decimal_places, rounding),
        }
    }
}

/// Totals over a finished report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of sellers.
    pub sellers: usize,
    /// Number of receipts.
    pub sales_count: usize,
    /// Sum of rounded revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Sum of rounded profit.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_profit: Decimal,
    /// Sum of rounded bonuses.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bonus: Decimal,
}

impl ReportSummary {
    /// Sums the rows of a report.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidDataset` if a total does not fit in the
    /// decimal range.
    pub fn from_rows(rows: &[ReportRow]) -> Result<Self, AnalysisError> {
        let mut summary = Self {
            sellers: rows.len(),
            ..Self::default()
        };
        for row in rows {
            summary.sales_count += row.sales_count;
            summary.total_revenue = add_total(summary.total_revenue, row.revenue, "revenue")?;
            summary.total_profit = add_total(summary.total_profit, row.profit, "profit")?;
            summary.total_bonus = add_total(summary.total_bonus, row.bonus, "bonus")?;
        }
        Ok(summary)
    }
}

fn add_total(total: Decimal, amount: Decimal, field: &str) -> Result<Decimal, AnalysisError> {
    total.checked_add(amount).ok_or_else(|| {
        AnalysisError::InvalidDataset(format!("total {field} overflows decimal range"))
    })
}
