use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::{
    extraction::{ExtractionStrategy, FieldExtractor},
    models::{ExtractResponse, FileExtractionResult},
    ocr::OcrService,
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(extract_fields))
}

#[derive(serde::Deserialize, IntoParams)]
pub struct ExtractQuery {
    /// Overrides the configured default strategy for this request.
    pub strategy: Option<ExtractionStrategy>,
}

/// Upload images and extract identity fields from each
#[utoipa::path(
    post,
    path = "/api/extract",
    tag = "extract",
    params(ExtractQuery),
    request_body(content = String, description = "Image files under repeated 'files' fields", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Per-file extraction results", body = ExtractResponse),
        (status = 400, description = "Malformed request or no files"),
        (status = 413, description = "Upload too large")
    )
)]
pub async fn extract_fields(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExtractQuery>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, StatusCode> {
    let strategy = query.strategy.unwrap_or(state.config.extraction_strategy);
    let extractor = strategy.extractor();
    let ocr_service = OcrService::new();

    let mut results = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to get multipart field: {}", e);
        StatusCode::BAD_REQUEST
    })? {
        let name = field.name().unwrap_or("").to_string();
        if name != "files" && name != "file" {
            continue;
        }

        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };
        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file data for '{}': {}", filename, e);
            StatusCode::BAD_REQUEST
        })?;

        info!("Processing upload: {} ({} bytes)", filename, data.len());
        results.push(process_file(&state, extractor.as_ref(), &ocr_service, filename, &data).await);
    }

    if results.is_empty() {
        warn!("Extraction request contained no files");
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(ExtractResponse {
        success: true,
        data: results,
    }))
}

/// One file end to end: pre-validation, staging, OCR, extraction, cleanup.
/// Always returns a result entry; failures never abort the batch.
async fn process_file(
    state: &AppState,
    extractor: &dyn FieldExtractor,
    ocr_service: &OcrService,
    filename: String,
    data: &[u8],
) -> FileExtractionResult {
    if !state.config.is_allowed_file_type(&filename) {
        warn!("Skipping '{}': extension not allowed", filename);
        return failure(filename, "Unsupported file type".to_string());
    }

    if !state.ocr.available {
        warn!("Skipping '{}': OCR engine is not available", filename);
        return failure(filename, "OCR engine is not available".to_string());
    }

    let staged_path = match state.file_service.save_temp_file(&filename, data).await {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to stage '{}': {}", filename, e);
            return failure(filename, "Failed to store uploaded file".to_string());
        }
    };

    if let Err(e) = state.file_service.create_thumbnail(&staged_path, &filename).await {
        warn!("Thumbnail generation failed for '{}': {}", filename, e);
    }

    let mime_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();
    let ocr_outcome = ocr_service
        .extract_text(
            &staged_path.to_string_lossy(),
            &mime_type,
            &state.config.ocr_language,
        )
        .await;
    state.file_service.cleanup_temp_file(&staged_path).await;

    match ocr_outcome {
        Ok(text) => {
            let fields = extractor.extract(&text);
            FileExtractionResult {
                filename,
                success: true,
                text,
                fields: Some(fields),
                error: None,
            }
        }
        Err(e) => {
            error!("OCR failed for '{}': {}", filename, e);
            failure(filename, e.to_string())
        }
    }
}

fn failure(filename: String, error: String) -> FileExtractionResult {
    FileExtractionResult {
        filename,
        success: false,
        text: String::new(),
        fields: None,
        error: Some(error),
    }
}
