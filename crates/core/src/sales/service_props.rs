//! Property-based tests for the sales analysis pipeline.

use proptest::prelude::*;
use rust_decimal::Decimal;
use salesrank_shared::types::{SellerId, Sku};

use super::ranking::ReportRow;
use super::service::{AnalysisOptions, analyze_sales_data};
use super::strategy::{RevenueStrategy, SimpleRevenue};
use super::types::{Dataset, LineItem, Product, PurchaseRecord, Seller};

/// Line item as (product slot, quantity, price in units of 4, discount).
///
/// Prices are multiples of 4 and discounts multiples of 25 so every line
/// revenue is a whole number and tier percentages stay exact at 2 dp.
fn line_strategy(products: usize) -> impl Strategy<Value = (usize, u32, i64, i64)> {
    (
        0..products,
        1u32..30,
        0i64..50,
        prop_oneof![Just(0i64), Just(25), Just(50), Just(75), Just(100)],
    )
}

fn dataset_strategy(sellers: std::ops::Range<usize>) -> impl Strategy<Value = Dataset> {
    (sellers, 1usize..25)
        .prop_flat_map(|(sellers, products)| {
            let record = (
                0..sellers,
                prop::collection::vec(line_strategy(products), 1..6),
                0i64..1_000,
            );
            (
                Just(sellers),
                prop::collection::vec(0i64..150, products),
                prop::collection::vec(record, 1..60),
            )
        })
        .prop_map(|(sellers, costs, records)| build_dataset(sellers, &costs, records))
}

fn build_dataset(
    sellers: usize,
    costs: &[i64],
    records: Vec<(usize, Vec<(usize, u32, i64, i64)>, i64)>,
) -> Dataset {
    Dataset {
        sellers: (0..sellers)
            .map(|i| Seller {
                id: SellerId::new(format!("seller_{i}")),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
            })
            .collect(),
        products: costs
            .iter()
            .enumerate()
            .map(|(i, cost)| Product {
                sku: Sku::new(format!("SKU_{i:03}")),
                purchase_price: Decimal::from(*cost),
                name: None,
                category: None,
                retail_price: None,
            })
            .collect(),
        purchase_records: records
            .into_iter()
            .map(|(seller, lines, total)| PurchaseRecord {
                receipt_id: None,
                date: None,
                seller_id: SellerId::new(format!("seller_{seller}")),
                customer_id: None,
                items: lines
                    .into_iter()
                    .map(|(product, quantity, price, discount)| LineItem {
                        sku: Sku::new(format!("SKU_{product:03}")),
                        quantity,
                        sale_price: Decimal::from(price * 4),
                        discount: Decimal::from(discount),
                    })
                    .collect(),
                total_discount: None,
                total_amount: Decimal::from(total),
            })
            .collect(),
    }
}

fn run(dataset: &Dataset) -> Vec<ReportRow> {
    analyze_sales_data(dataset, &AnalysisOptions::default()).expect("generated dataset is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every purchase record is counted exactly once.
    #[test]
    fn prop_sales_count_sums_to_records(dataset in dataset_strategy(1..10)) {
        let rows = run(&dataset);
        let total: usize = rows.iter().map(|r| r.sales_count).sum();
        prop_assert_eq!(total, dataset.purchase_records.len());
        prop_assert_eq!(rows.len(), dataset.sellers.len());
    }

    /// Report rows are ordered by non-increasing profit.
    #[test]
    fn prop_report_sorted_by_profit(dataset in dataset_strategy(1..10)) {
        let rows = run(&dataset);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].profit >= pair[1].profit);
        }
    }

    /// Equal profits keep seller input order.
    #[test]
    fn prop_equal_profit_keeps_input_order(dataset in dataset_strategy(2..10)) {
        let rows = run(&dataset);
        let ids: Vec<&SellerId> = dataset.sellers.iter().map(|s| &s.id).collect();
        let position = |row: &ReportRow| ids.iter().position(|id| **id == row.seller_id).unwrap();
        for pair in rows.windows(2) {
            if pair[0].profit == pair[1].profit {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    /// Top products are capped at 10 and ordered by non-increasing quantity.
    #[test]
    fn prop_top_products_bounded_and_sorted(dataset in dataset_strategy(1..5)) {
        for row in run(&dataset) {
            prop_assert!(row.top_products.len() <= 10);
            for pair in row.top_products.windows(2) {
                prop_assert!(pair[0].quantity >= pair[1].quantity);
            }
        }
    }

    /// Default tiers for four or more sellers.
    #[test]
    fn prop_default_tiers(dataset in dataset_strategy(4..10)) {
        let rows = run(&dataset);
        let last = rows.len() - 1;
        for (rank, row) in rows.iter().enumerate() {
            let percent = match rank {
                0 => Decimal::from(15),
                1 | 2 => Decimal::from(10),
                r if r == last => Decimal::ZERO,
                _ => Decimal::from(5),
            };
            prop_assert_eq!(row.bonus, row.profit * percent / Decimal::ONE_HUNDRED);
        }
    }

    /// A single seller always gets the first-place bonus.
    #[test]
    fn prop_lone_seller_bonus(dataset in dataset_strategy(1..2)) {
        let rows = run(&dataset);
        prop_assert_eq!(rows.len(), 1);
        let expected = rows[0].profit * Decimal::from(15) / Decimal::ONE_HUNDRED;
        prop_assert_eq!(rows[0].bonus, expected);
    }

    /// Discount 0 yields the gross amount and discount 100 yields nothing.
    #[test]
    fn prop_simple_revenue_discount_bounds(
        cents in 0i64..1_000_000,
        quantity in 1u32..1_000,
    ) {
        let product = Product {
            sku: Sku::new("SKU_001"),
            purchase_price: Decimal::ZERO,
            name: None,
            category: None,
            retail_price: None,
        };
        let mut item = LineItem {
            sku: Sku::new("SKU_001"),
            quantity,
            sale_price: Decimal::new(cents, 2),
            discount: Decimal::ZERO,
        };
        let gross = item.sale_price * Decimal::from(quantity);
        prop_assert_eq!(SimpleRevenue.compute(&item, &product), Some(gross));

        item.discount = Decimal::ONE_HUNDRED;
        prop_assert_eq!(SimpleRevenue.compute(&item, &product), Some(Decimal::ZERO));
    }
}
