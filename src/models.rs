use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ocr::health::OcrAvailability;

/// Identity fields recovered by the line-positional strategy.
///
/// Every field defaults to empty (`None` for age) when it was not found;
/// absence is represented, never thrown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionalFields {
    pub name: String,
    /// `DD/MM/YYYY` after separator normalization, or empty.
    pub dob: String,
    pub age: Option<i32>,
    /// One of the closed honorific set (นาย, นาง, นางสาว) or empty.
    pub prefix: String,
}

/// Identity fields recovered by the label-anchored strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabeledFields {
    pub eng_name: String,
    pub th_name: String,
    /// `DD/MM/YYYY` after separator normalization, or empty.
    pub dob: String,
    pub age: Option<i32>,
    /// Sequence/ID number; only serialized when its label was present.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub seq: String,
}

/// One structured record per processed image. The JSON shape follows the
/// strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ExtractedFields {
    Positional(PositionalFields),
    Labeled(LabeledFields),
}

/// Per-file outcome within one extraction request. A failed file never
/// aborts the batch; it is reported here with `success == false` and the
/// remaining files still get processed.
#[derive(Debug, Serialize, ToSchema)]
pub struct FileExtractionResult {
    pub filename: String,
    pub success: bool,
    /// Raw text recognized by the OCR engine, empty on failure.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ExtractedFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: Vec<FileExtractionResult>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub ocr: OcrAvailability,
}
