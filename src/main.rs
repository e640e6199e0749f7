use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::{info, warn};

use idlens::{config::Config, ocr::health::OcrAvailability, services::file_service::FileService, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let file_service = FileService::new(config.upload_path.clone());
    file_service.initialize_directory_structure().await?;

    // One probe at startup; handlers get the result as a value in AppState
    let ocr = OcrAvailability::probe(&config.ocr_language);
    if !ocr.available {
        warn!("Starting without a usable OCR engine; uploads will fail per file until it is installed");
    }

    let max_body_bytes = config.max_upload_size_mb * 1024 * 1024;
    let state = Arc::new(AppState {
        config: config.clone(),
        ocr,
        file_service,
    });

    let app = Router::new()
        .route("/api/health", get(idlens::health_check))
        .nest("/api/extract", idlens::routes::extract::router())
        .merge(idlens::swagger::create_swagger_router())
        .fallback_service(ServeDir::new("static").fallback(ServeFile::new("static/index.html")))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
