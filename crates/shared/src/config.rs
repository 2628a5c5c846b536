//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::RoundingMode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report generation configuration.
    pub report: ReportConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Report generation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum number of entries in each seller's top products list.
    pub top_products_limit: usize,
    /// Decimal places kept for revenue, profit and bonus.
    pub decimal_places: u32,
    /// Rounding rule applied to money fields.
    pub rounding: RoundingMode,
    /// Name of the revenue strategy to resolve.
    pub revenue_strategy: String,
    /// Name of the bonus strategy to resolve.
    pub bonus_strategy: String,
    /// Percentages used by the tiered bonus strategy.
    pub bonus_tiers: BonusTierConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            decimal_places: 2,
            rounding: RoundingMode::default(),
            revenue_strategy: "simple".to_string(),
            bonus_strategy: "tiered".to_string(),
            bonus_tiers: BonusTierConfig::default(),
        }
    }
}

/// Bonus percentages per rank tier, expressed as percent of profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BonusTierConfig {
    /// Rank 0.
    pub first_place: Decimal,
    /// Ranks 1 and 2.
    pub podium: Decimal,
    /// Last rank (when it is not rank 0, 1 or 2).
    pub last_place: Decimal,
    /// Every other rank.
    pub middle: Decimal,
}

impl Default for BonusTierConfig {
    fn default() -> Self {
        Self {
            first_place: Decimal::from(15),
            podium: Decimal::from(10),
            last_place: Decimal::ZERO,
            middle: Decimal::from(5),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format for log lines.
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `SALESRANK__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SALESRANK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
