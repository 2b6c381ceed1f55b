//! Period aggregation of warehouse transactions.
//!
//! Rows are bucketed by the end date of the chosen period and the four
//! numeric measures are summed per bucket. Buckets with no contributing
//! rows are omitted. The input dataset is never mutated and the sums carry
//! the input numeric types without rounding.

use common::Period;
use model::Dataset;
use polars::prelude::*;
use tracing::instrument;

use crate::error::{ComputeError, Result};
use crate::frame::{date_to_millis, millis_to_date, DatasetPolars};

/// One row of the aggregated dataset: the bucket's end date and the summed
/// measures of every transaction falling into the bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedBucket {
    pub date: chrono::NaiveDate,
    pub quantity: i64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

/// Groups the dataset into time buckets and sums `revenue`, `cost`,
/// `profit` and `quantity` within each bucket.
///
/// An empty dataset aggregates to an empty bucket list; this is not an
/// error. Buckets come back sorted by date.
#[instrument(skip(dataset), fields(rows = dataset.len()))]
pub fn aggregate(dataset: &Dataset, period: Period) -> Result<Vec<AggregatedBucket>> {
    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let buckets: Vec<i64> = dataset
        .rows()
        .iter()
        .map(|record| date_to_millis(period.bucket_end(record.date)))
        .collect();

    let mut df = dataset.to_df()?;
    df.with_column(Series::new("bucket".into(), buckets))?;

    let summed = df
        .lazy()
        .group_by([col("bucket")])
        .agg([
            col("quantity").sum(),
            col("revenue").sum(),
            col("cost").sum(),
            col("profit").sum(),
        ])
        .sort(["bucket"], Default::default())
        .collect()?;

    extract_buckets(&summed)
}

fn extract_buckets(df: &DataFrame) -> Result<Vec<AggregatedBucket>> {
    let bucket_col = df.column("bucket")?;
    let quantity_col = df.column("quantity")?;
    let revenue_col = df.column("revenue")?;
    let cost_col = df.column("cost")?;
    let profit_col = df.column("profit")?;

    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let millis = bucket_col
            .get(i)?
            .try_extract::<i64>()
            .map_err(|e| ComputeError::Aggregation(format!("bucket at row {}: {}", i, e)))?;
        let quantity = quantity_col
            .get(i)?
            .try_extract::<i64>()
            .map_err(|e| ComputeError::Aggregation(format!("quantity at row {}: {}", i, e)))?;
        let revenue = revenue_col
            .get(i)?
            .try_extract::<f64>()
            .map_err(|e| ComputeError::Aggregation(format!("revenue at row {}: {}", i, e)))?;
        let cost = cost_col
            .get(i)?
            .try_extract::<f64>()
            .map_err(|e| ComputeError::Aggregation(format!("cost at row {}: {}", i, e)))?;
        let profit = profit_col
            .get(i)?
            .try_extract::<f64>()
            .map_err(|e| ComputeError::Aggregation(format!("profit at row {}: {}", i, e)))?;

        out.push(AggregatedBucket {
            date: millis_to_date(millis)?,
            quantity,
            revenue,
            cost,
            profit,
        });
    }

    Ok(out)
}
