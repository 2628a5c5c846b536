//! Input validation for the sales analysis pipeline.
//!
//! Every check here runs before aggregation; a failure means nothing is
//! computed.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::{AnalysisError, StrategySlot};
use super::service::AnalysisOptions;
use super::strategy::{BonusStrategy, RevenueStrategy, StrategyBinding};
use super::types::Dataset;

/// Required top-level collections of a dataset, in check order.
const REQUIRED_COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Checks the shape of an untyped dataset and deserializes it.
///
/// The value must be an object whose `sellers`, `products` and
/// `purchase_records` members are non-empty arrays.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDataset` on any shape or field violation.
pub fn validate_dataset_value(value: &Value) -> Result<Dataset, AnalysisError> {
    let object = match value {
        Value::Object(object) => object,
        Value::Null => {
            return Err(AnalysisError::InvalidDataset(
                "dataset is missing".to_string(),
            ));
        }
        _ => {
            return Err(AnalysisError::InvalidDataset(
                "dataset must be an object".to_string(),
            ));
        }
    };

    for key in REQUIRED_COLLECTIONS {
        match object.get(key) {
            None | Some(Value::Null) => {
                return Err(AnalysisError::InvalidDataset(format!("'{key}' is missing")));
            }
            Some(Value::Array(items)) if items.is_empty() => {
                return Err(AnalysisError::InvalidDataset(format!(
                    "'{key}' must not be empty"
                )));
            }
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(AnalysisError::InvalidDataset(format!(
                    "'{key}' must be an array"
                )));
            }
        }
    }

    Dataset::deserialize(value).map_err(|err| AnalysisError::InvalidDataset(err.to_string()))
}

/// Checks a typed dataset.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDataset` if a collection is empty or a
/// price, quantity or discount is out of range.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AnalysisError> {
    let collections = [
        ("sellers", dataset.sellers.is_empty()),
        ("products", dataset.products.is_empty()),
        ("purchase_records", dataset.purchase_records.is_empty()),
    ];
    for (key, is_empty) in collections {
        if is_empty {
            return Err(AnalysisError::InvalidDataset(format!(
                "'{key}' must not be empty"
            )));
        }
    }

    for product in &dataset.products {
        if product.purchase_price < Decimal::ZERO {
            return Err(AnalysisError::InvalidDataset(format!(
                "product {} has a negative purchase_price",
                product.sku
            )));
        }
    }

    for (position, record) in dataset.purchase_records.iter().enumerate() {
        let receipt = record.receipt_id.as_deref().unwrap_or("<unnamed>");
        for item in &record.items {
            if item.quantity == 0 {
                return Err(AnalysisError::InvalidDataset(format!(
                    "purchase record #{position} ({receipt}): quantity of {} must be positive",
                    item.sku
                )));
            }
            if item.sale_price < Decimal::ZERO {
                return Err(AnalysisError::InvalidDataset(format!(
                    "purchase record #{position} ({receipt}): sale_price of {} is negative",
                    item.sku
                )));
            }
            if item.discount < Decimal::ZERO || item.discount > Decimal::ONE_HUNDRED {
                return Err(AnalysisError::InvalidDataset(format!(
                    "purchase record #{position} ({receipt}): discount of {} is outside 0..=100",
                    item.sku
                )));
            }
        }
    }

    Ok(())
}

/// Invocable strategies taken from validated options.
pub struct ResolvedStrategies<'a> {
    /// Revenue strategy.
    pub revenue: &'a dyn RevenueStrategy,
    /// Bonus strategy.
    pub bonus: &'a dyn BonusStrategy,
}

/// Checks that both strategies are present and invocable.
///
/// Presence is checked for both slots before invocability.
///
/// # Errors
///
/// Returns `AnalysisError::MissingStrategy` if a slot is empty, or
/// `AnalysisError::InvalidStrategyType` if a slot holds an unresolved name.
pub fn validate_options(
    options: &AnalysisOptions,
) -> Result<ResolvedStrategies<'_>, AnalysisError> {
    let revenue = options
        .calculate_revenue
        .as_ref()
        .ok_or(AnalysisError::MissingStrategy(StrategySlot::Revenue))?;
    let bonus = options
        .calculate_bonus
        .as_ref()
        .ok_or(AnalysisError::MissingStrategy(StrategySlot::Bonus))?;

    Ok(ResolvedStrategies {
        revenue: invocable(revenue, StrategySlot::Revenue)?,
        bonus: invocable(bonus, StrategySlot::Bonus)?,
    })
}

fn invocable<S: ?Sized>(
    binding: &StrategyBinding<S>,
    slot: StrategySlot,
) -> Result<&S, AnalysisError> {
    match binding {
        StrategyBinding::Callable(strategy) => Ok(&**strategy),
        StrategyBinding::Named(name) => Err(AnalysisError::InvalidStrategyType {
            slot,
            name: name.clone(),
        }),
    }
}
