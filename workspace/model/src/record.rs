use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names of the warehouse transaction schema, in canonical order.
///
/// Every dataset carries exactly these nine columns. The constant exists so
/// that an empty dataset can still answer schema questions (rendering a
/// "no data" table, validating an upload header) without holding any rows.
pub const COLUMNS: [&str; 9] = [
    "date",
    "product_category",
    "operation_type",
    "quantity",
    "revenue",
    "cost",
    "profit",
    "employee",
    "warehouse_zone",
];

/// A single warehouse operation: one dated movement of goods with its
/// monetary outcome.
///
/// `profit` is taken from the input as-is and is not recomputed from
/// `revenue - cost`; the system trusts the supplied column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub product_category: String,
    pub operation_type: String,
    pub quantity: u32,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub employee: String,
    pub warehouse_zone: String,
}

impl TransactionRecord {
    /// Creates a record with empty categorical fields, useful as a test
    /// fixture base.
    pub fn new(date: NaiveDate, quantity: u32, revenue: f64, cost: f64, profit: f64) -> Self {
        Self {
            date,
            product_category: String::new(),
            operation_type: String::new(),
            quantity,
            revenue,
            cost,
            profit,
            employee: String::new(),
            warehouse_zone: String::new(),
        }
    }
}
