pub mod age;
pub mod label_anchored;
pub mod line_heuristic;
pub mod normalize;
pub mod prefix;

use std::str::FromStr;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::ExtractedFields;
pub use label_anchored::LabelAnchoredExtractor;
pub use line_heuristic::LineHeuristicExtractor;

/// A field-extraction strategy over raw OCR text.
///
/// Implementations own no shared state and never fail: fields that cannot be
/// recovered come back empty rather than as errors, so concurrent requests
/// can share an extractor freely.
pub trait FieldExtractor: Send + Sync {
    fn extract(&self, text: &str) -> ExtractedFields;
}

/// Which extractor to run. Some document templates carry explicit field
/// labels while others present bare positional lines, so the choice is
/// configuration, not auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Positional lines without labels ([`LineHeuristicExtractor`]).
    Lines,
    /// Explicit field labels ([`LabelAnchoredExtractor`]).
    Labels,
}

impl ExtractionStrategy {
    pub fn extractor(self) -> Box<dyn FieldExtractor> {
        match self {
            Self::Lines => Box::new(LineHeuristicExtractor::new()),
            Self::Labels => Box::new(LabelAnchoredExtractor::new()),
        }
    }
}

impl FromStr for ExtractionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lines" => Ok(Self::Lines),
            "labels" => Ok(Self::Labels),
            other => Err(anyhow::anyhow!("Unknown extraction strategy: {}", other)),
        }
    }
}
