//! Dashboard controller: a pure state-transition function over the single
//! active dataset.
//!
//! Every event produces a fresh [`DashboardView`] by recomputing the
//! aggregated dataset, the three chart descriptions and the table view, in
//! that order. The controller never updates outputs partially: a failed
//! upload keeps the previous dataset active and surfaces the error in the
//! view's message panel while the charts and table keep reproducing the
//! prior data.

use common::{ChartKind, ChartSpec, DashboardView, Period};
use compute::{aggregate, cost_share_chart, profit_histogram, render_table, timeseries_chart};
use model::Dataset;
use tracing::{info, warn};

use crate::loader;

/// A triggering event for one dashboard recomputation.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The period selector changed; re-render the active dataset
    PeriodChanged(Period),
    /// A replacement dataset arrived as a
    /// `<content-type-descriptor>,<base64>` payload
    UploadReceived {
        filename: Option<String>,
        contents: String,
    },
}

/// The dashboard's persistent state: the active dataset and the selected
/// period.
///
/// Transitions run synchronously and to completion; the dataset is
/// replaced atomically or not at all, so there is never a half-applied
/// upload.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    period: Period,
}

impl Dashboard {
    /// Creates the startup state around the default dataset (possibly
    /// empty when the default file was absent).
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            period: Period::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Applies one event and returns the successor state together with the
    /// recomputed outputs.
    pub fn handle(&self, event: DashboardEvent) -> (Dashboard, DashboardView) {
        match event {
            DashboardEvent::PeriodChanged(period) => {
                let next = Dashboard {
                    dataset: self.dataset.clone(),
                    period,
                };
                let view = next.render(None);
                (next, view)
            }
            DashboardEvent::UploadReceived { filename, contents } => {
                match loader::load_upload(&contents) {
                    Ok(dataset) => {
                        info!(rows = dataset.len(), ?filename, "upload replaced the active dataset");
                        let next = Dashboard {
                            dataset,
                            period: self.period,
                        };
                        let view = next.render(None);
                        (next, view)
                    }
                    Err(err) => {
                        warn!(%err, ?filename, "rejected malformed upload, keeping previous dataset");
                        let view = self.render(Some(err.to_string()));
                        (self.clone(), view)
                    }
                }
            }
        }
    }

    /// Recomputes all four outputs from the active dataset. `message`
    /// carries an error from the triggering event, if any; a failed
    /// aggregation substitutes a placeholder time-series chart and its own
    /// message.
    pub fn render(&self, message: Option<String>) -> DashboardView {
        let mut error = message;

        let timeseries = match aggregate(&self.dataset, self.period) {
            Ok(buckets) => timeseries_chart(&buckets),
            Err(err) => {
                warn!(%err, "aggregation failed, substituting placeholder chart");
                error.get_or_insert(err.to_string());
                ChartSpec::no_data(ChartKind::Line)
            }
        };

        let cost_share = match cost_share_chart(&self.dataset) {
            Ok(chart) => chart,
            Err(err) => {
                warn!(%err, "cost-share chart failed, substituting placeholder");
                error.get_or_insert(err.to_string());
                ChartSpec::no_data(ChartKind::Pie)
            }
        };

        let profit_distribution = profit_histogram(&self.dataset);
        let table = render_table(&self.dataset);

        DashboardView {
            period: self.period,
            timeseries,
            cost_share,
            profit_distribution,
            table,
            error,
        }
    }
}
