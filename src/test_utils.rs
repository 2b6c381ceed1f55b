use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;

use crate::controller::Dashboard;
use crate::datagen;
use crate::router::create_router;
use crate::schemas::AppState;

/// Create AppState over a deterministic generated dataset
pub fn setup_test_app_state(records: usize) -> AppState {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let dataset = datagen::generate(records, 42, start);
    AppState::new(Dashboard::new(dataset))
}

/// Create the application router for testing
pub fn setup_test_app() -> Router {
    create_router(setup_test_app_state(50))
}

/// Encode a CSV body the way the upload interface expects it
pub fn encode_upload(csv: &str) -> String {
    format!("data:text/csv;base64,{}", STANDARD.encode(csv))
}
