use std::path::Path;

use model::Dataset;
use tracing::{info, warn};

use crate::controller::Dashboard;
use crate::loader;
use crate::schemas::AppState;

/// Default location of the warehouse data file, relative to the working
/// directory. The `generate` command writes here and `serve` reads here.
pub const DEFAULT_DATA_PATH: &str = "data/warehouse_data.csv";

/// Initialize application state from the default data file.
///
/// A missing or unreadable default file is not fatal: the dashboard starts
/// in a ready state over an empty dataset and only logs a warning. Upload
/// failures, by contrast, are user-facing and handled by the controller.
pub fn initialize_app_state(data_path: &Path) -> AppState {
    let dataset = match loader::load_path(data_path) {
        Ok(dataset) => {
            info!(rows = dataset.len(), path = %data_path.display(), "loaded default dataset");
            dataset
        }
        Err(err) => {
            warn!(%err, path = %data_path.display(), "default dataset unavailable, starting empty");
            Dataset::empty()
        }
    };

    AppState::new(Dashboard::new(dataset))
}
