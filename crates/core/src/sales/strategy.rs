//! Pluggable revenue and bonus strategies.
//!
//! Both strategies are one-method traits. Plain closures with the matching
//! signature implement them, so callers can inject either a named type or a
//! one-off function.
//!
//! Strategies return `None` when the amount does not fit in a `Decimal`.

use rust_decimal::Decimal;
use salesrank_shared::config::{BonusTierConfig, ReportConfig};

use super::aggregate::SellerAccumulator;
use super::types::{LineItem, Product};

/// Computes the discounted revenue of one line item.
pub trait RevenueStrategy {
    /// Revenue for `item`, given the product card it refers to.
    fn compute(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal>,
{
    fn compute(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

/// Computes a seller's bonus from its profit rank.
///
/// The whole accumulator is passed so implementations may use any field,
/// not just profit.
pub trait BonusStrategy {
    /// Bonus for the seller at 0-based `rank` out of `total` sellers.
    fn compute(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Option<Decimal>;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> Option<Decimal>,
{
    fn compute(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Option<Decimal> {
        self(rank, total, seller)
    }
}

/// `sale_price * quantity * (1 - discount / 100)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn compute(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let gross = item.sale_price.checked_mul(Decimal::from(item.quantity))?;
        let share = item.discount.checked_div(Decimal::ONE_HUNDRED)?;
        gross.checked_mul(Decimal::ONE.checked_sub(share)?)
    }
}

/// `sale_price * quantity`, ignoring the discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrossRevenue;

impl RevenueStrategy for GrossRevenue {
    fn compute(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        item.sale_price.checked_mul(Decimal::from(item.quantity))
    }
}

/// Fixed percentage tiers by rank.
///
/// Rules are checked in order and the first match wins:
/// 1. rank 0 -> `first_place`
/// 2. ranks 1 and 2 -> `podium`
/// 3. last rank -> `last_place`
/// 4. otherwise -> `middle`
///
/// A lone seller is both first and last and therefore gets `first_place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredBonus {
    tiers: BonusTierConfig,
}

impl TieredBonus {
    /// Creates a tiered strategy with custom percentages.
    #[must_use]
    pub const fn new(tiers: BonusTierConfig) -> Self {
        Self { tiers }
    }

    /// Percentage of profit paid at `rank` out of `total`.
    #[must_use]
    pub fn percent_for(&self, rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            self.tiers.first_place
        } else if rank == 1 || rank == 2 {
            self.tiers.podium
        } else if rank + 1 == total {
            self.tiers.last_place
        } else {
            self.tiers.middle
        }
    }
}

impl Default for TieredBonus {
    fn default() -> Self {
        Self::new(BonusTierConfig::default())
    }
}

impl BonusStrategy for TieredBonus {
    fn compute(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Option<Decimal> {
        let scaled = seller.profit.checked_mul(self.percent_for(rank, total))?;
        scaled.checked_div(Decimal::ONE_HUNDRED)
    }
}

/// Pays no bonus at any rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBonus;

impl BonusStrategy for NoBonus {
    fn compute(&self, _rank: usize, _total: usize, _seller: &SellerAccumulator) -> Option<Decimal> {
        Some(Decimal::ZERO)
    }
}

/// A strategy slot value: either an invocable implementation or a bare
/// name that did not resolve to one.
pub enum StrategyBinding<S: ?Sized> {
    /// Invocable implementation.
    Callable(Box<S>),
    /// Unresolved strategy name.
    Named(String),
}

impl<S: ?Sized> std::fmt::Debug for StrategyBinding<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl StrategyBinding<dyn RevenueStrategy> {
    /// Binds an invocable revenue strategy.
    pub fn revenue(strategy: impl RevenueStrategy + 'static) -> Self {
        Self::Callable(Box::new(strategy))
    }
}

impl StrategyBinding<dyn BonusStrategy> {
    /// Binds an invocable bonus strategy.
    pub fn bonus(strategy: impl BonusStrategy + 'static) -> Self {
        Self::Callable(Box::new(strategy))
    }
}

/// Resolves strategy names from configuration into bindings.
///
/// Known revenue names: `simple`, `gross`. Known bonus names: `tiered`,
/// `none`. Unknown names yield [`StrategyBinding::Named`]; blank names yield
/// no binding at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyRegistry {
    tiers: BonusTierConfig,
}

impl StrategyRegistry {
    /// Creates a registry whose `tiered` strategy uses `tiers`.
    #[must_use]
    pub const fn new(tiers: BonusTierConfig) -> Self {
        Self { tiers }
    }

    /// Creates a registry from report configuration.
    #[must_use]
    pub const fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.bonus_tiers)
    }

    /// Resolves a revenue strategy name.
    #[must_use]
    pub fn revenue(&self, name: &str) -> Option<StrategyBinding<dyn RevenueStrategy>> {
        match name.trim() {
            "" => None,
            "simple" => Some(StrategyBinding::revenue(SimpleRevenue)),
            "gross" => Some(StrategyBinding::revenue(GrossRevenue)),
            other => Some(StrategyBinding::Named(other.to_string())),
        }
    }

    /// Resolves a bonus strategy name.
    #[must_use]
    pub fn bonus(&self, name: &str) -> Option<StrategyBinding<dyn BonusStrategy>> {
        match name.trim() {
            "" => None,
            "tiered" => Some(StrategyBinding::bonus(TieredBonus::new(self.tiers))),
            "none" => Some(StrategyBinding::bonus(NoBonus)),
            other => Some(StrategyBinding::Named(other.to_string())),
        }
    }
}
