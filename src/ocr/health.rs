use std::process::Command;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::ocr::error::OcrError;

pub struct OcrHealthChecker;

impl OcrHealthChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_tesseract_installation(&self) -> Result<String, OcrError> {
        let output = Command::new("tesseract")
            .arg("--version")
            .output()
            .map_err(|_| OcrError::TesseractNotInstalled)?;

        if !output.status.success() {
            return Err(OcrError::TesseractNotInstalled);
        }

        let version_info = String::from_utf8_lossy(&output.stdout);
        let version = version_info
            .lines()
            .next()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(version)
    }

    pub fn get_available_languages(&self) -> Result<Vec<String>, OcrError> {
        let output = Command::new("tesseract")
            .arg("--list-langs")
            .output()
            .map_err(|_| OcrError::TesseractNotInstalled)?;

        if !output.status.success() {
            return Err(OcrError::TesseractNotInstalled);
        }

        let langs_output = String::from_utf8_lossy(&output.stdout);
        let mut languages: Vec<String> = langs_output
            .lines()
            .skip(1) // Skip "List of available languages:"
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        languages.sort();
        Ok(languages)
    }

    pub fn validate_language(&self, lang: &str) -> Result<(), OcrError> {
        let available_languages = self.get_available_languages()?;
        if !available_languages.contains(&lang.to_string()) {
            return Err(OcrError::LanguageDataNotFound {
                lang: lang.to_string(),
            });
        }
        Ok(())
    }

    /// Validate a language combination (e.g., "tha+eng")
    pub fn validate_language_combination(&self, lang_combination: &str) -> Result<(), OcrError> {
        if lang_combination.is_empty() {
            return Err(OcrError::LanguageDataNotFound {
                lang: "empty".to_string(),
            });
        }

        let languages: Vec<&str> = lang_combination.split('+').collect();

        for lang in &languages {
            self.validate_language(lang.trim())?;
        }

        // Tesseract slows down badly past a few scripts
        if languages.len() > 4 {
            return Err(OcrError::LanguageDataNotFound {
                lang: format!(
                    "Too many languages in combination: {}. Maximum is 4.",
                    languages.len()
                ),
            });
        }

        Ok(())
    }
}

impl Default for OcrHealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the OCR engine taken once at startup and handed to request
/// handlers through `AppState` as a plain value. Handlers never probe the
/// engine themselves; when `available` is false the extract route records a
/// per-file error and skips OCR entirely.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OcrAvailability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tesseract_version: Option<String>,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrAvailability {
    /// Probe the engine and check that `language` (a `tha+eng`-style
    /// combination) is usable.
    pub fn probe(language: &str) -> Self {
        let checker = OcrHealthChecker::new();

        let version = match checker.check_tesseract_installation() {
            Ok(version) => version,
            Err(e) => {
                warn!("OCR engine unavailable: {}", e);
                return Self {
                    available: false,
                    tesseract_version: None,
                    languages: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };

        let languages = checker.get_available_languages().unwrap_or_default();

        if let Err(e) = checker.validate_language_combination(language) {
            warn!("OCR language '{}' is not usable: {}", language, e);
            return Self {
                available: false,
                tesseract_version: Some(version),
                languages,
                error: Some(e.to_string()),
            };
        }

        info!("OCR engine ready: {}", version);
        Self {
            available: true,
            tesseract_version: Some(version),
            languages,
            error: None,
        }
    }

    /// A capability that always reports the engine as down; used when probing
    /// is pointless (tests, builds without the `ocr` feature).
    pub fn unavailable(reason: &str) -> Self {
        Self {
            available: false,
            tesseract_version: None,
            languages: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}
