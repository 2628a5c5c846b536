//! Folds purchase records into per-seller accumulators.

use std::collections::HashMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use salesrank_shared::types::{SellerId, Sku};
use serde::Serialize;
use tracing::{debug, warn};

use super::error::AnalysisError;
use super::strategy::RevenueStrategy;
use super::types::{Dataset, LineItem, Product, Seller};

/// Running per-seller totals built during aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct SellerAccumulator {
    /// Seller ID.
    pub id: SellerId,
    /// Display name.
    pub name: String,
    /// Sum of receipt totals.
    pub revenue: Decimal,
    /// Sum of line profits (may be negative).
    pub profit: Decimal,
    /// Number of receipts.
    pub sales_count: usize,
    /// Units sold per sku, in first-seen order.
    pub products_sold: IndexMap<Sku, u64>,
}

impl SellerAccumulator {
    /// Creates a zeroed accumulator for `seller`.
    #[must_use]
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: IndexMap::new(),
        }
    }

    fn record_units(&mut self, sku: &Sku, quantity: u32) {
        *self.products_sold.entry(sku.clone()).or_insert(0) += u64::from(quantity);
    }
}

/// Folds every purchase record of `dataset` into one accumulator per seller.
///
/// The result keeps seller input order. Line revenue comes from `revenue`;
/// line profit is that revenue minus `purchase_price * quantity` and is never
/// clamped.
///
/// # Errors
///
/// Returns `AnalysisError::UnknownSeller` or `AnalysisError::UnknownProduct`
/// on the first dangling reference. Nothing is returned in that case.
pub fn aggregate(
    dataset: &Dataset,
    revenue: &dyn RevenueStrategy,
) -> Result<Vec<SellerAccumulator>, AnalysisError> {
    let mut accumulators: Vec<SellerAccumulator> =
        dataset.sellers.iter().map(SellerAccumulator::new).collect();

    // Duplicate ids resolve to the last seller carrying them.
    let seller_index: HashMap<&str, usize> = dataset
        .sellers
        .iter()
        .enumerate()
        .map(|(slot, seller)| (seller.id.as_str(), slot))
        .collect();
    if seller_index.len() < dataset.sellers.len() {
        warn!(
            sellers = dataset.sellers.len(),
            distinct = seller_index.len(),
            "Duplicate seller ids in dataset"
        );
    }

    let product_index: HashMap<&str, &Product> = dataset
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    for record in &dataset.purchase_records {
        let slot = *seller_index
            .get(record.seller_id.as_str())
            .ok_or_else(|| AnalysisError::UnknownSeller(record.seller_id.clone()))?;
        let seller = &mut accumulators[slot];

        seller.sales_count += 1;
        seller.revenue = seller
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| out_of_range("revenue", &seller.id))?;

        for item in &record.items {
            let product = product_index
                .get(item.sku.as_str())
                .ok_or_else(|| AnalysisError::UnknownProduct(item.sku.clone()))?;

            seller.profit = line_profit(revenue, item, product)
                .and_then(|line| seller.profit.checked_add(line))
                .ok_or_else(|| out_of_range("profit", &seller.id))?;
            seller.record_units(&item.sku, item.quantity);
        }
    }

    debug!(
        sellers = accumulators.len(),
        records = dataset.purchase_records.len(),
        "Aggregated purchase records"
    );

    Ok(accumulators)
}

/// Discounted revenue minus cost for one line, never clamped.
fn line_profit(
    revenue: &dyn RevenueStrategy,
    item: &LineItem,
    product: &Product,
) -> Option<Decimal> {
    let discounted = revenue.compute(item, product)?;
    let units = Decimal::from(item.quantity);
    let cost = product.purchase_price.checked_mul(units)?;
    discounted.checked_sub(cost)
}

fn out_of_range(total: &str, seller: &SellerId) -> AnalysisError {
    AnalysisError::InvalidDataset(format!("{total} of seller {seller} overflows decimal range"))
}
