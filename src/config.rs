use std::env;
use std::path::Path;

use anyhow::Result;

use crate::extraction::ExtractionStrategy;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub upload_path: String,
    /// Tesseract language combination, e.g. "tha+eng".
    pub ocr_language: String,
    pub allowed_file_types: Vec<String>,
    /// Aggregate request body limit.
    pub max_upload_size_mb: usize,
    /// Default strategy; a request may override it via query parameter.
    pub extraction_strategy: ExtractionStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            upload_path: env::var("UPLOAD_PATH").unwrap_or_else(|_| "./uploads".to_string()),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "tha+eng".to_string()),
            allowed_file_types: env::var("ALLOWED_FILE_TYPES")
                .unwrap_or_else(|_| "png,jpg,jpeg,bmp,tiff,webp".to_string())
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .collect(),
            max_upload_size_mb: env::var("MAX_UPLOAD_SIZE_MB")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
            extraction_strategy: env::var("EXTRACTION_STRATEGY")
                .ok()
                .map(|s| s.parse())
                .transpose()?
                .unwrap_or(ExtractionStrategy::Lines),
        })
    }

    /// Upload pre-validation by file extension; files failing this are
    /// skipped before OCR is ever invoked.
    pub fn is_allowed_file_type(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.allowed_file_types.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}
