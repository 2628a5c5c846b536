//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use salesrank_shared::ReportConfig;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "salesrank",
    version,
    about = "Per-seller sales report: revenue, profit, rank bonus and top products"
)]
pub struct Args {
    /// Dataset JSON with `sellers`, `products` and `purchase_records`.
    pub dataset: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Wrap the output as `{ "report": [...], "summary": {...} }`.
    #[arg(long)]
    pub summary: bool,

    /// Override the number of top products per seller.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Override the revenue strategy name (`simple`, `gross`).
    #[arg(long, value_name = "NAME")]
    pub revenue_strategy: Option<String>,

    /// Override the bonus strategy name (`tiered`, `none`).
    #[arg(long, value_name = "NAME")]
    pub bonus_strategy: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of loaded configuration.
    #[must_use]
    pub fn apply_overrides(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(top) = self.top {
            config.top_products_limit = top;
        }
        if let Some(name) = &self.revenue_strategy {
            config.revenue_strategy.clone_from(name);
        }
        if let Some(name) = &self.bonus_strategy {
            config.bonus_strategy.clone_from(name);
        }
        config
    }
}
