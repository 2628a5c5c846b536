//! Sales input data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salesrank_shared::types::{SellerId, Sku};

/// The three input collections consumed by the analysis pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Sellers, in report tie-break order.
    pub sellers: Vec<Seller>,
    /// Product catalogue.
    pub products: Vec<Product>,
    /// Receipts, folded in order.
    pub purchase_records: Vec<PurchaseRecord>,
}

/// A seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    /// Seller ID.
    pub id: SellerId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name joined by a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A product card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stock-keeping unit.
    pub sku: Sku,
    /// Purchase (cost) price per unit.
    pub purchase_price: Decimal,
    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Suggested retail price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<Decimal>,
}

/// One receipt owned by a single seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Receipt identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    /// Receipt date as given by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Owning seller.
    pub seller_id: SellerId,
    /// Customer identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Line items, in receipt order.
    pub items: Vec<LineItem>,
    /// Total discount on the receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<Decimal>,
    /// Total amount paid.
    pub total_amount: Decimal,
}

/// One product sold within a purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product sold.
    pub sku: Sku,
    /// Units sold.
    pub quantity: u32,
    /// Sale price per unit.
    pub sale_price: Decimal,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: Decimal,
}
