use chrono::{DateTime, NaiveDate};
use model::Dataset;
use polars::prelude::*;

use crate::error::{ComputeError, Result};

/// Converts a calendar date to the midnight-UTC epoch millisecond value
/// used for date columns in DataFrames.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis()
}

/// Converts an epoch millisecond value back to a calendar date.
pub fn millis_to_date(millis: i64) -> Result<NaiveDate> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| ComputeError::Date(format!("Invalid date value: {}", millis)))
}

/// Extension trait for Dataset to convert to Polars
pub trait DatasetPolars {
    /// Convert the dataset to a Polars DataFrame with the full schema,
    /// dates encoded as epoch milliseconds
    fn to_df(&self) -> Result<DataFrame>;
}

impl DatasetPolars for Dataset {
    fn to_df(&self) -> Result<DataFrame> {
        let mut dates = Vec::with_capacity(self.len());
        let mut categories = Vec::with_capacity(self.len());
        let mut operations = Vec::with_capacity(self.len());
        let mut quantities = Vec::with_capacity(self.len());
        let mut revenues = Vec::with_capacity(self.len());
        let mut costs = Vec::with_capacity(self.len());
        let mut profits = Vec::with_capacity(self.len());
        let mut employees = Vec::with_capacity(self.len());
        let mut zones = Vec::with_capacity(self.len());

        for record in self.rows() {
            dates.push(date_to_millis(record.date));
            categories.push(record.product_category.clone());
            operations.push(record.operation_type.clone());
            quantities.push(i64::from(record.quantity));
            revenues.push(record.revenue);
            costs.push(record.cost);
            profits.push(record.profit);
            employees.push(record.employee.clone());
            zones.push(record.warehouse_zone.clone());
        }

        let df = DataFrame::new(vec![
            Series::new("date".into(), dates).into(),
            Series::new("product_category".into(), categories).into(),
            Series::new("operation_type".into(), operations).into(),
            Series::new("quantity".into(), quantities).into(),
            Series::new("revenue".into(), revenues).into(),
            Series::new("cost".into(), costs).into(),
            Series::new("profit".into(), profits).into(),
            Series::new("employee".into(), employees).into(),
            Series::new("warehouse_zone".into(), zones).into(),
        ])?;

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TransactionRecord;

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            product_category: "Electronics".to_string(),
            operation_type: "shipment".to_string(),
            quantity: 2,
            revenue: 100.5,
            cost: 70.0,
            profit: 30.5,
            employee: "Ivanov".to_string(),
            warehouse_zone: "Zone A".to_string(),
        }
    }

    #[test]
    fn test_dataset_to_df_shape() {
        let dataset = Dataset::new(vec![sample_record(), sample_record()]);
        let df = dataset.to_df().unwrap();
        assert_eq!(df.shape(), (2, 9));

        let column_names = df.get_column_names();
        for expected in dataset.columns() {
            assert!(column_names.iter().any(|name| name.as_str() == *expected));
        }
    }

    #[test]
    fn test_dataset_to_df_values() {
        let record = sample_record();
        let expected_millis = date_to_millis(record.date);
        let dataset = Dataset::new(vec![record]);
        let df = dataset.to_df().unwrap();

        let date_series = df.column("date").unwrap();
        let revenue_series = df.column("revenue").unwrap();
        let quantity_series = df.column("quantity").unwrap();

        if let AnyValue::Int64(millis) = date_series.get(0).unwrap() {
            assert_eq!(millis, expected_millis);
        } else {
            panic!("Expected Int64 value for date");
        }

        if let AnyValue::Float64(revenue) = revenue_series.get(0).unwrap() {
            assert_eq!(revenue, 100.5);
        } else {
            panic!("Expected Float64 value for revenue");
        }

        if let AnyValue::Int64(quantity) = quantity_series.get(0).unwrap() {
            assert_eq!(quantity, 2);
        } else {
            panic!("Expected Int64 value for quantity");
        }
    }

    #[test]
    fn test_empty_dataset_to_df() {
        let df = Dataset::empty().to_df().unwrap();
        assert_eq!(df.shape(), (0, 9));
    }

    #[test]
    fn test_millis_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        assert_eq!(millis_to_date(date_to_millis(date)).unwrap(), date);
    }
}
