use crate::record::{TransactionRecord, COLUMNS};

/// The in-memory table of transaction records currently active for
/// rendering.
///
/// A dataset is an ordered collection of rows sharing the fixed nine-column
/// schema. It may be empty, but it always retains the full schema so that
/// downstream components can render "no data" states without special-casing
/// column access. Datasets are created fresh on every load; an upload fully
/// replaces the active dataset and nothing is merged across uploads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<TransactionRecord>,
}

impl Dataset {
    /// Creates a dataset from rows, preserving their order.
    pub fn new(rows: Vec<TransactionRecord>) -> Self {
        Self { rows }
    }

    /// Creates an empty dataset. The schema is still fully present via
    /// [`Dataset::columns`].
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Column names of the schema, in canonical order.
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// All rows in their original order.
    pub fn rows(&self) -> &[TransactionRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the `revenue` column.
    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.revenue).sum()
    }

    /// Sum of the `cost` column.
    pub fn total_cost(&self) -> f64 {
        self.rows.iter().map(|r| r.cost).sum()
    }

    /// Sum of the `profit` column.
    pub fn total_profit(&self) -> f64 {
        self.rows.iter().map(|r| r.profit).sum()
    }

    /// Sum of the `quantity` column.
    pub fn total_quantity(&self) -> i64 {
        self.rows.iter().map(|r| i64::from(r.quantity)).sum()
    }
}

impl FromIterator<TransactionRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, quantity: u32, revenue: f64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            quantity,
            revenue,
            revenue * 0.7,
            revenue * 0.3,
        )
    }

    #[test]
    fn test_empty_dataset_keeps_schema() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.columns().len(), 9);
        assert_eq!(dataset.columns()[0], "date");
    }

    #[test]
    fn test_rows_preserve_order() {
        let dataset = Dataset::new(vec![record(3, 1, 10.0), record(1, 2, 20.0)]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.rows()[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
        );
        assert_eq!(
            dataset.rows()[1].date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_totals() {
        let dataset = Dataset::new(vec![record(1, 2, 100.0), record(2, 3, 200.0)]);
        assert_eq!(dataset.total_revenue(), 300.0);
        assert_eq!(dataset.total_quantity(), 5);
        assert!((dataset.total_cost() - 210.0).abs() < 1e-9);
        assert!((dataset.total_profit() - 90.0).abs() < 1e-9);
    }
}
