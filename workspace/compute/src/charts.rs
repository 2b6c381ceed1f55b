//! Chart builders: pure functions from a table to a renderer-agnostic
//! chart description.
//!
//! - time-series line chart over the *aggregated* dataset;
//! - cost-share pie chart over the raw dataset, grouped by product
//!   category;
//! - profit-distribution histogram over the raw dataset.
//!
//! Every builder handles the empty input explicitly and produces a
//! placeholder spec with a "no data" title instead of failing.

use common::{ChartKind, ChartSeries, ChartSpec};
use model::Dataset;
use polars::prelude::*;
use tracing::instrument;

use crate::aggregate::AggregatedBucket;
use crate::error::{ComputeError, Result};
use crate::frame::DatasetPolars;

/// Number of bins in the profit-distribution histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Builds the revenue/cost/profit line chart from aggregated buckets.
pub fn timeseries_chart(buckets: &[AggregatedBucket]) -> ChartSpec {
    if buckets.is_empty() {
        return ChartSpec::no_data(ChartKind::Line);
    }

    let labels = buckets
        .iter()
        .map(|b| b.date.format("%Y-%m-%d").to_string())
        .collect();

    ChartSpec {
        kind: ChartKind::Line,
        title: "Revenue, cost and profit over time".to_string(),
        x_axis: Some("Date".to_string()),
        y_axis: Some("Amount".to_string()),
        labels,
        series: vec![
            ChartSeries {
                name: "revenue".to_string(),
                values: buckets.iter().map(|b| b.revenue).collect(),
            },
            ChartSeries {
                name: "cost".to_string(),
                values: buckets.iter().map(|b| b.cost).collect(),
            },
            ChartSeries {
                name: "profit".to_string(),
                values: buckets.iter().map(|b| b.profit).collect(),
            },
        ],
    }
}

/// Builds the cost-share pie chart from the raw dataset: one slice per
/// product category with the summed cost. Categories whose cost sums to
/// exactly zero keep their zero-size slice.
#[instrument(skip(dataset), fields(rows = dataset.len()))]
pub fn cost_share_chart(dataset: &Dataset) -> Result<ChartSpec> {
    if dataset.is_empty() {
        return Ok(ChartSpec::no_data(ChartKind::Pie));
    }

    let summed = dataset
        .to_df()?
        .lazy()
        .group_by([col("product_category")])
        .agg([col("cost").sum()])
        .sort(["product_category"], Default::default())
        .collect()?;

    let category_col = summed.column("product_category")?;
    let cost_col = summed.column("cost")?;

    let mut labels = Vec::with_capacity(summed.height());
    let mut values = Vec::with_capacity(summed.height());
    for i in 0..summed.height() {
        let category = match category_col.get(i)? {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => {
                return Err(ComputeError::Series(format!(
                    "Expected string category at row {}, got {}",
                    i, other
                )))
            }
        };
        let cost = cost_col
            .get(i)?
            .try_extract::<f64>()
            .map_err(|e| ComputeError::Series(format!("cost at row {}: {}", i, e)))?;
        labels.push(category);
        values.push(cost);
    }

    Ok(ChartSpec {
        kind: ChartKind::Pie,
        title: "Cost share by product category".to_string(),
        x_axis: None,
        y_axis: None,
        labels,
        series: vec![ChartSeries {
            name: "cost".to_string(),
            values,
        }],
    })
}

/// Builds the profit-distribution histogram from the raw dataset: the
/// `profit` column binned into [`HISTOGRAM_BINS`] equal-width bins.
pub fn profit_histogram(dataset: &Dataset) -> ChartSpec {
    if dataset.is_empty() {
        return ChartSpec::no_data(ChartKind::Histogram);
    }

    let profits: Vec<f64> = dataset.rows().iter().map(|r| r.profit).collect();
    let min = profits.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = profits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // A degenerate range (all profits equal) collapses into the first bin.
    let width = if max > min {
        (max - min) / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let mut counts = vec![0u64; HISTOGRAM_BINS];
    for profit in &profits {
        let index = (((profit - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[index] += 1;
    }

    let labels = (0..HISTOGRAM_BINS)
        .map(|i| {
            let lower = min + width * i as f64;
            let upper = min + width * (i + 1) as f64;
            format!("{:.2}..{:.2}", lower, upper)
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Histogram,
        title: "Profit distribution".to_string(),
        x_axis: Some("Profit".to_string()),
        y_axis: Some("Count".to_string()),
        labels,
        series: vec![ChartSeries {
            name: "count".to_string(),
            values: counts.into_iter().map(|c| c as f64).collect(),
        }],
    }
}
