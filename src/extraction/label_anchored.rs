use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::extraction::age::age_from_dob;
use crate::extraction::normalize::{normalize, normalize_date_separators};
use crate::extraction::FieldExtractor;
use crate::models::{ExtractedFields, LabeledFields};

/// Fields the label-anchored strategy knows how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabeledField {
    EngName,
    ThName,
    Dob,
    Seq,
}

/// Known label spellings, one row per (field, spelling): English long and
/// short forms plus the Thai labels seen on the card templates. Longer
/// spellings come before their prefixes. Supporting a new spelling means
/// adding a row here, not touching control flow.
const LABEL_SPELLINGS: &[(LabeledField, &str)] = &[
    (LabeledField::EngName, "ENGLISH NAME"),
    (LabeledField::EngName, "ENG_NAME"),
    (LabeledField::EngName, "ENG NAME"),
    (LabeledField::EngName, "ชื่อภาษาอังกฤษ"),
    (LabeledField::ThName, "THAI NAME"),
    (LabeledField::ThName, "TH_NAME"),
    (LabeledField::ThName, "TH NAME"),
    (LabeledField::ThName, "ชื่อภาษาไทย"),
    (LabeledField::ThName, "ชื่อ"),
    (LabeledField::Dob, "DATE OF BIRTH"),
    (LabeledField::Dob, "BIRTH DATE"),
    (LabeledField::Dob, "DOB"),
    (LabeledField::Dob, "วันเดือนปีเกิด"),
    (LabeledField::Dob, "วันเกิด"),
    (LabeledField::Seq, "SEQUENCE"),
    (LabeledField::Seq, "SEQ_NO"),
    (LabeledField::Seq, "SEQ"),
    (LabeledField::Seq, "เลขที่"),
];

/// Honorifics that may sit between a name label and the name itself; they
/// stay part of the captured value so prefix inference downstream can see
/// them.
const HONORIFIC_GROUP: &str = r"(?:(?:MR|MRS|MISS|MS)\.?\s+|นางสาว|นาย|นาง)?";

struct LabelPattern {
    field: LabeledField,
    pattern: Regex,
}

/// Recovers fields from OCR text that carries explicit labels, in English or
/// Thai, with `:` or `：` after the label.
///
/// Works on single-line-normalized text: each field's pattern captures from
/// its label up to the line end, and the capture is then cut at the next
/// recognized label of any field. Latin matching is case-insensitive; a
/// missing label leaves its field empty.
pub struct LabelAnchoredExtractor {
    table: Vec<LabelPattern>,
    next_label: Regex,
    reference_date: Option<NaiveDate>,
}

impl LabelAnchoredExtractor {
    pub fn new() -> Self {
        let table = [
            LabeledField::EngName,
            LabeledField::ThName,
            LabeledField::Dob,
            LabeledField::Seq,
        ]
        .into_iter()
        .map(|field| LabelPattern {
            field,
            pattern: Self::field_pattern(field),
        })
        .collect();

        let all_labels = LABEL_SPELLINGS
            .iter()
            .map(|(_, spelling)| Self::spelling_pattern(spelling))
            .collect::<Vec<_>>()
            .join("|");
        let next_label = Regex::new(&format!(r"(?i)(?:{})\s*[:：]", all_labels)).unwrap();

        Self {
            table,
            next_label,
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

    fn field_pattern(field: LabeledField) -> Regex {
        let labels = LABEL_SPELLINGS
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, spelling)| Self::spelling_pattern(spelling))
            .collect::<Vec<_>>()
            .join("|");
        let value = match field {
            LabeledField::EngName | LabeledField::ThName => {
                format!(r"({}[^\r\n]*)", HONORIFIC_GROUP)
            }
            LabeledField::Dob | LabeledField::Seq => r"([^\r\n]*)".to_string(),
        };
        Regex::new(&format!(r"(?i)(?:{})\s*[:：]\s*{}", labels, value)).unwrap()
    }

    // Word-bound the Latin spellings; Thai script has no usable \b.
    fn spelling_pattern(spelling: &str) -> String {
        if spelling.is_ascii() {
            format!(r"\b{}", regex::escape(spelling))
        } else {
            regex::escape(spelling)
        }
    }

    fn cut_at_next_label(&self, value: &str) -> String {
        match self.next_label.find(value) {
            Some(found) => value[..found.start()].trim().to_string(),
            None => value.trim().to_string(),
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for LabelAnchoredExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LabelAnchoredExtractor {
    fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = LabeledFields::default();
        let flat = normalize(text);
        if flat.is_empty() {
            return ExtractedFields::Labeled(fields);
        }

        for entry in &self.table {
            let Some(captures) = entry.pattern.captures(&flat) else {
                continue;
            };
            let value = self.cut_at_next_label(captures.get(1).map_or("", |m| m.as_str()));
            if value.is_empty() {
                continue;
            }
            match entry.field {
                LabeledField::EngName => fields.eng_name = value,
                LabeledField::ThName => fields.th_name = value,
                LabeledField::Dob => fields.dob = normalize_date_separators(&value),
                LabeledField::Seq => fields.seq = value,
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

        ExtractedFields::Labeled(fields)
    }
}
