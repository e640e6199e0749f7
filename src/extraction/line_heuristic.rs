use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::extraction::age::age_from_dob;
use crate::extraction::normalize::{non_empty_lines, normalize_date_separators};
use crate::extraction::prefix::guess_prefix;
use crate::extraction::FieldExtractor;
use crate::models::{ExtractedFields, PositionalFields};

/// Recovers name and date of birth from label-less OCR text, using line
/// position and a strict date pattern as the only structural signals.
///
/// Forward scan: the first line that is entirely a `D/M/YYYY`-shaped date is
/// the date of birth, the first line that is not becomes the name, and later
/// lines never overwrite either. If the scan finds no date, the last line is
/// re-checked for a date anywhere in it (OCR noise often glues junk onto the
/// bottom line); on a hit the second-to-last line replaces the name.
pub struct LineHeuristicExtractor {
    date_line: Regex,
    date_in_line: Regex,
    reference_date: Option<NaiveDate>,
}

impl LineHeuristicExtractor {
    pub fn new() -> Self {
        Self {
            date_line: Regex::new(r"^\d{1,2}[/\-.]\d{1,2}[/\-.]\d{4}$").unwrap(),
            date_in_line: Regex::new(r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{4}").unwrap(),
            reference_date: None,
        }
    }

    /// Pin "today" so age derivation is deterministic in tests.
    pub fn with_reference_date(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
            ..Self::new()
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for LineHeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LineHeuristicExtractor {
    fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = PositionalFields::default();
        if text.trim().is_empty() {
            return ExtractedFields::Positional(fields);
        }

        let lines = non_empty_lines(text);
        for line in &lines {
            if self.date_line.is_match(line) {
                if fields.dob.is_empty() {
                    fields.dob = normalize_date_separators(line);
                }
            } else if fields.name.is_empty() {
                fields.name = (*line).to_string();
            }
        }

        // Bottom-line fallback, only when the forward scan came up empty
        if fields.dob.is_empty() && lines.len() >= 2 {
            if let Some(found) = self.date_in_line.find(lines[lines.len() - 1]) {
                fields.dob = normalize_date_separators(found.as_str());
                fields.name = lines[lines.len() - 2].to_string();
            }
        }

        if !fields.dob.is_empty() {
            fields.age = age_from_dob(&fields.dob, self.today());
            if fields.age.is_none() {
                warn!(
                    "Date of birth '{}' did not parse as a calendar date",
                    fields.dob
                );
            }
        }
        fields.prefix = guess_prefix(&fields.name, fields.age);

        ExtractedFields::Positional(fields)
    }
}
