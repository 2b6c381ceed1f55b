use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::chart::ChartSpec;
use crate::period::Period;
use crate::table::TableView;

/// The complete set of rendered outputs for one dashboard recomputation.
///
/// Emitted on every controller transition. When an upload fails to parse,
/// the charts and table reproduce the previously active dataset and
/// `error` carries the user-facing message (a partial-state update, not a
/// rollback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardView {
    /// Period the time-series chart was aggregated with
    pub period: Period,
    /// Revenue/cost/profit over time, from the aggregated dataset
    pub timeseries: ChartSpec,
    /// Cost share per product category, from the raw dataset
    pub cost_share: ChartSpec,
    /// Profit distribution histogram, from the raw dataset
    pub profit_distribution: ChartSpec,
    /// Leading rows of the raw dataset
    pub table: TableView,
    /// User-facing message when the triggering event failed
    pub error: Option<String>,
}
