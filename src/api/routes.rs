use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    reports::{get_report, get_report_html},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players/:name/report", get(get_report))
        .route("/api/players/:name/report.html", get(get_report_html))
        .with_state(state)
}
