// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::payload::{dashboard_to_payload, DashboardResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Message shown in place of the dashboard when any dataset fails.
const DASHBOARD_ERROR_MESSAGE: &str = "Gagal memuat data dashboard. Pastikan file JSON \
    (sales_over_time.json, dll.) tersedia dan coba lagi. Periksa log server untuk detail.";

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Assemble and return the full dashboard. Any failure replaces the whole
/// payload with a single error message; no partial dashboard is served.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dashboard_service.build_dashboard().await {
        Ok(dashboard) => {
            let payload = dashboard_to_payload(dashboard);
            (StatusCode::OK, Json(DashboardResponse::Success { data: payload }))
        }
        Err(e) => {
            tracing::error!("failed to build dashboard: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DashboardResponse::Error {
                    message: DASHBOARD_ERROR_MESSAGE.to_string(),
                }),
            )
        }
    }
}
