/// Collapse every maximal run of whitespace (spaces, tabs, newlines) into a
/// single space and strip leading/trailing whitespace.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for all inputs.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed, non-empty lines of the raw text.
///
/// The line-positional extractor depends on line boundaries as a structural
/// signal, so it must not go through [`normalize`].
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Rewrite `-` and `.` date separators to `/` so downstream parsing only has
/// to deal with `DD/MM/YYYY`.
pub fn normalize_date_separators(date: &str) -> String {
    date.replace(['-', '.'], "/")
}
