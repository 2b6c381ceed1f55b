use axum::{
    extract::{Query, State},
    response::Json,
};
use common::DashboardView;
use tracing::instrument;

use crate::controller::DashboardEvent;
use crate::schemas::{ApiResponse, AppState, DashboardQuery, UploadRequest};

/// Get the rendered dashboard, optionally switching the aggregation period
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(
        ("period" = Option<String>, Query, description = "Aggregation period: day, week, month or quarter"),
    ),
    responses(
        (status = 200, description = "Dashboard rendered successfully", body = ApiResponse<DashboardView>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<DashboardView>> {
    let mut dashboard = state.dashboard.lock().await;

    let view = match query.period {
        Some(period) => {
            let (next, view) = dashboard.handle(DashboardEvent::PeriodChanged(period));
            *dashboard = next;
            view
        }
        None => dashboard.render(None),
    };

    Json(ApiResponse {
        data: view,
        message: "Dashboard rendered successfully".to_string(),
        success: true,
    })
}

/// Upload a replacement dataset
///
/// A valid payload atomically replaces the active dataset. A malformed
/// payload keeps the previous dataset active; the response view carries
/// the error message alongside the unchanged charts and table.
#[utoipa::path(
    post,
    path = "/api/v1/dashboard/upload",
    tag = "dashboard",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Upload processed; success=false when the payload was rejected", body = ApiResponse<DashboardView>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(filename = ?request.filename))]
pub async fn upload_dataset(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Json<ApiResponse<DashboardView>> {
    let mut dashboard = state.dashboard.lock().await;

    let (next, view) = dashboard.handle(DashboardEvent::UploadReceived {
        filename: request.filename,
        contents: request.contents,
    });
    *dashboard = next;

    let success = view.error.is_none();
    let message = if success {
        "Dataset uploaded successfully".to_string()
    } else {
        "Upload rejected; previous dataset remains active".to_string()
    };

    Json(ApiResponse {
        data: view,
        message,
        success,
    })
}
