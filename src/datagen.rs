//! Synthetic dataset generator for the warehouse dashboard.
//!
//! Produces N transaction records with dates spread uniformly over a
//! 90-day window, drawn from fixed category/operation/employee/zone
//! vocabularies, with operation-type-dependent revenue and cost formulas.
//! The RNG is seeded so a given (records, seed, start date) triple always
//! generates the same dataset.

use chrono::{Days, NaiveDate};
use model::{Dataset, TransactionRecord};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

pub const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Furniture",
    "Groceries",
    "Clothing",
    "Books",
    "Household chemicals",
];

pub const OPERATIONS: [&str; 3] = ["receipt", "shipment", "return"];

/// Draw weights for the operation types, aligned with [`OPERATIONS`].
const OPERATION_WEIGHTS: [f64; 3] = [0.3, 0.6, 0.1];

pub const EMPLOYEES: [&str; 6] = [
    "Ivanov", "Petrov", "Sidorov", "Smirnova", "Kozlov", "Morozova",
];

pub const ZONES: [&str; 4] = ["Zone A", "Zone B", "Zone C", "Zone D"];

/// Number of days the generated dates are spread over.
const DATE_SPREAD_DAYS: u64 = 90;

/// Generates a reproducible synthetic dataset of `records` rows.
pub fn generate(records: usize, seed: u64, start_date: NaiveDate) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let operation_dist =
        WeightedIndex::new(OPERATION_WEIGHTS).expect("static weights are valid");

    let mut rows = Vec::with_capacity(records);
    for _ in 0..records {
        let date = start_date + Days::new(rng.gen_range(0..DATE_SPREAD_DAYS));
        let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let operation = OPERATIONS[operation_dist.sample(&mut rng)];
        let quantity = rng.gen_range(1..100u32);

        let (revenue, cost) = match operation {
            "shipment" => {
                let revenue = f64::from(quantity) * f64::from(rng.gen_range(500..5000));
                let cost = revenue * rng.gen_range(0.6..0.8);
                (revenue, cost)
            }
            "receipt" => {
                let cost = f64::from(quantity) * f64::from(rng.gen_range(300..3000));
                (0.0, cost)
            }
            _ => {
                // Returns reverse a prior shipment: negative revenue,
                // proportionally negative cost.
                let revenue = -f64::from(quantity) * f64::from(rng.gen_range(500..5000));
                let cost = -revenue * rng.gen_range(0.5..0.7);
                (revenue, cost)
            }
        };

        rows.push(TransactionRecord {
            date,
            product_category: category.to_string(),
            operation_type: operation.to_string(),
            quantity,
            revenue,
            cost,
            profit: revenue - cost,
            employee: EMPLOYEES[rng.gen_range(0..EMPLOYEES.len())].to_string(),
            warehouse_zone: ZONES[rng.gen_range(0..ZONES.len())].to_string(),
        });
    }

    Dataset::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_generates_requested_record_count() {
        let dataset = generate(500, 42, start());
        assert_eq!(dataset.len(), 500);
    }

    #[test]
    fn test_values_come_from_vocabularies() {
        let dataset = generate(200, 42, start());
        let end = start() + Days::new(89);
        for record in dataset.rows() {
            assert!(OPERATIONS.contains(&record.operation_type.as_str()));
            assert!(CATEGORIES.contains(&record.product_category.as_str()));
            assert!(EMPLOYEES.contains(&record.employee.as_str()));
            assert!(ZONES.contains(&record.warehouse_zone.as_str()));
            assert!(record.date >= start() && record.date <= end);
            assert!(record.quantity >= 1 && record.quantity < 100);
        }
    }

    #[test]
    fn test_profit_is_revenue_minus_cost() {
        let dataset = generate(200, 7, start());
        for record in dataset.rows() {
            assert!((record.profit - (record.revenue - record.cost)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_operation_formulas() {
        let dataset = generate(300, 3, start());
        for record in dataset.rows() {
            match record.operation_type.as_str() {
                "shipment" => {
                    assert!(record.revenue > 0.0);
                    assert!(record.cost > 0.0 && record.cost < record.revenue);
                }
                "receipt" => {
                    assert_eq!(record.revenue, 0.0);
                    assert!(record.cost > 0.0);
                }
                "return" => {
                    assert!(record.revenue < 0.0);
                    assert!(record.cost < 0.0);
                }
                other => panic!("Unknown operation type {other}"),
            }
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let first = generate(100, 42, start());
        let second = generate(100, 42, start());
        assert_eq!(first, second);

        let other_seed = generate(100, 43, start());
        assert_ne!(first, other_seed);
    }
}
