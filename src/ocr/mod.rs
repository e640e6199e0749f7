pub mod error;
pub mod health;

use anyhow::{anyhow, Result};

use crate::ocr::error::OcrError;

#[cfg(feature = "ocr")]
use crate::ocr::health::OcrHealthChecker;
#[cfg(feature = "ocr")]
use tesseract::{PageSegMode, Tesseract};

pub struct OcrService;

impl OcrService {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from a staged upload, dispatching on MIME type. Only
    /// images are supported; everything else is rejected before Tesseract is
    /// touched.
    pub async fn extract_text(&self, file_path: &str, mime_type: &str, lang: &str) -> Result<String> {
        if mime_type.starts_with("image/") {
            self.extract_text_from_image(file_path, lang).await
        } else {
            Err(anyhow!(OcrError::InvalidImageFormat {
                details: format!("Unsupported MIME type: {}", mime_type),
            }))
        }
    }

    pub async fn extract_text_from_image(&self, file_path: &str, lang: &str) -> Result<String> {
        #[cfg(feature = "ocr")]
        {
            let health_checker = OcrHealthChecker::new();
            health_checker
                .check_tesseract_installation()
                .map_err(|e: OcrError| anyhow!(e))?;
            health_checker
                .validate_language_combination(lang)
                .map_err(|e: OcrError| anyhow!(e))?;

            let mut tesseract = Tesseract::new(None, Some(lang)).map_err(|e| {
                anyhow!(OcrError::InitializationFailed {
                    details: e.to_string(),
                })
            })?;
            // Card text reads as one uniform block
            tesseract.set_page_seg_mode(PageSegMode::PsmSingleBlock);

            let mut tesseract = tesseract.set_image(file_path)?;
            let text = tesseract.get_text().map_err(|e| {
                anyhow!(OcrError::InitializationFailed {
                    details: format!("Failed to extract text: {}", e),
                })
            })?;

            Ok(text.trim().to_string())
        }

        #[cfg(not(feature = "ocr"))]
        {
            let _ = (file_path, lang);
            Err(anyhow!(OcrError::TesseractNotInstalled))
        }
    }
}

impl Default for OcrService {
    fn default() -> Self {
        Self::new()
    }
}
