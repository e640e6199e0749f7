pub mod config;
pub mod extraction;
pub mod models;
pub mod ocr;
pub mod routes;
pub mod services;
pub mod swagger;

#[cfg(test)]
mod tests;

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use config::Config;
use models::HealthResponse;
use ocr::health::OcrAvailability;
use services::file_service::FileService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// OCR engine snapshot taken once at startup; handlers treat it as a
    /// plain value, never as something to re-probe.
    pub ocr: OcrAvailability,
    pub file_service: FileService,
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "extract",
    responses(
        (status = 200, description = "Service health and OCR engine status", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        ocr: state.ocr.clone(),
    }))
}
