use std::sync::Arc;

use common::{ChartKind, ChartSeries, ChartSpec, DashboardView, Period, TableView};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use utoipa::{OpenApi, ToSchema};

use crate::controller::Dashboard;

/// Application state shared across handlers
///
/// The dashboard sits behind a mutex so recomputations are serialized:
/// one triggering event fully completes before the next one is applied.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The single active dashboard
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }
}

/// Query parameters for the dashboard endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct DashboardQuery {
    /// Aggregation period for the time-series chart (defaults to the
    /// currently selected one)
    pub period: Option<Period>,
}

/// Request body for the dataset upload endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadRequest {
    /// Original filename, for logging only
    pub filename: Option<String>,
    /// Payload as `<content-type-descriptor>,<base64 bytes>`
    pub contents: String,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of rows in the active dataset
    pub dataset_rows: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::dashboard::upload_dataset,
    ),
    components(
        schemas(
            ApiResponse<DashboardView>,
            ErrorResponse,
            HealthResponse,
            DashboardQuery,
            UploadRequest,
            DashboardView,
            ChartSpec,
            ChartSeries,
            ChartKind,
            TableView,
            Period,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Warehouse dashboard endpoints"),
    ),
    info(
        title = "Stockboard API",
        description = "Warehouse operations dashboard - aggregates transaction records into charts and a table view",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
