pub mod aggregate;
pub mod charts;
pub mod error;
pub mod frame;
pub mod table;

pub use aggregate::{aggregate, AggregatedBucket};
pub use charts::{cost_share_chart, profit_histogram, timeseries_chart};
pub use error::{ComputeError, Result};
pub use table::{render_table, TABLE_ROW_LIMIT};
