use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        ExtractResponse, ExtractedFields, FileExtractionResult, HealthResponse, LabeledFields,
        PositionalFields,
    },
    ocr::health::OcrAvailability,
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        crate::routes::extract::extract_fields,
    ),
    components(
        schemas(
            ExtractResponse, ExtractedFields, FileExtractionResult, HealthResponse,
            LabeledFields, PositionalFields, OcrAvailability
        )
    ),
    tags(
        (name = "extract", description = "Image upload and identity field extraction endpoints"),
    ),
    info(
        title = "Idlens API",
        version = "0.3.1",
        description = "ID document OCR and identity field extraction API"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
