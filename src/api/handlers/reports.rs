use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use log::{error, info, warn};
use std::sync::Arc;

use super::{AppState, ReportParams};
use crate::database::SqliteMatchStore;
use crate::report::{render_html, stat_lines};
use crate::services::report::{PlayerReport, ReportService};

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<ReportParams>,
) -> Response {
    match load_report(&state, &name, &params) {
        Ok(report) => Json(report).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

pub async fn get_report_html(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<ReportParams>,
) -> Response {
    let report = match load_report(&state, &name, &params) {
        Ok(report) => report,
        Err(rejection) => return rejection.into_response(),
    };

    let lines = stat_lines(report.match_count, &report.statistics);
    match render_html(&report.subject, &lines, &report.rating_series) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Failed to render report for {}: {:?}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render Error").into_response()
        }
    }
}

fn load_report(
    state: &AppState,
    name: &str,
    params: &ReportParams,
) -> Result<PlayerReport, (StatusCode, String)> {
    let (start, end) = state.config.resolve_range(params.start, params.end);
    info!("GET report for {} ({} to {})", name, start, end);
    if start > end {
        warn!("  → Rejected inverted range for {}", name);
        return Err((StatusCode::BAD_REQUEST, "Start date must be before end date.".to_string()));
    }

    let store = SqliteMatchStore::new(state.pool.clone());
    let report = ReportService::new(&store)
        .build(name, start, end)
        .map_err(|e| {
            error!("Report query failed for {}: {:?}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
        })?;

    if report.match_count == 0 {
        let known = store.has_player(name).map_err(|e| {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
        })?;
        if !known {
            warn!("  → No data for {}", name);
            return Err((StatusCode::NOT_FOUND, format!("No data for {name}.")));
        }
    }

    Ok(report)
}
