//! Sales analysis error types.

use salesrank_shared::AppError;
use salesrank_shared::types::{SellerId, Sku};
use thiserror::Error;

/// Strategy slot in [`AnalysisOptions`](super::AnalysisOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySlot {
    /// Discounted line revenue.
    Revenue,
    /// Bonus by rank.
    Bonus,
}

impl std::fmt::Display for StrategySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revenue => write!(f, "calculate_revenue"),
            Self::Bonus => write!(f, "calculate_bonus"),
        }
    }
}

/// Errors that abort a sales analysis run.
///
/// Every variant is fatal: no partial report is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Dataset is missing, not a mapping, or a required collection is
    /// absent, not a sequence, empty, or holds out-of-range values.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// A strategy was not supplied.
    #[error("Missing strategy: {0}")]
    MissingStrategy(StrategySlot),

    /// A strategy was supplied but cannot be invoked.
    #[error("Strategy {slot} is not invocable: '{name}' does not name a known strategy")]
    InvalidStrategyType {
        /// Offending slot.
        slot: StrategySlot,
        /// Name that failed to resolve.
        name: String,
    },

    /// A purchase record references a seller that does not exist.
    #[error("Unknown seller: {0}")]
    UnknownSeller(SellerId),

    /// A line item references a product that does not exist.
    #[error("Unknown product: {0}")]
    UnknownProduct(Sku),
}

impl AnalysisError {
    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDataset(_) => "INVALID_DATASET",
            Self::MissingStrategy(_) => "MISSING_STRATEGY",
            Self::InvalidStrategyType { .. } => "INVALID_STRATEGY_TYPE",
            Self::UnknownSeller(_) => "UNKNOWN_SELLER",
            Self::UnknownProduct(_) => "UNKNOWN_PRODUCT",
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidDataset(_)
            | AnalysisError::MissingStrategy(_)
            | AnalysisError::InvalidStrategyType { .. } => Self::Validation(err.to_string()),
            AnalysisError::UnknownSeller(_) | AnalysisError::UnknownProduct(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}
