//! Common transport-layer types shared between the backend and any
//! consumer of the dashboard API. These structs describe the rendered
//! outputs (chart descriptions, table view, the assembled dashboard view)
//! so a presentation layer can deserialize responses without duplicating
//! shapes.

mod chart;
mod dashboard;
mod period;
mod table;

pub use chart::{ChartKind, ChartSeries, ChartSpec, NO_DATA_TITLE};
pub use dashboard::DashboardView;
pub use period::Period;
pub use table::TableView;
