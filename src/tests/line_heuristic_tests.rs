#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::extraction::{FieldExtractor, LineHeuristicExtractor};
    use crate::models::{ExtractedFields, PositionalFields};

    fn extractor() -> LineHeuristicExtractor {
        LineHeuristicExtractor::with_reference_date(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap())
    }

    fn positional(result: ExtractedFields) -> PositionalFields {
        match result {
            ExtractedFields::Positional(fields) => fields,
            other => panic!("expected positional fields, got {:?}", other),
        }
    }

    #[test]
    fn test_name_then_date() {
        let fields = positional(extractor().extract("JOHN SMITH\n15/08/1990"));
        assert_eq!(fields.name, "JOHN SMITH");
        assert_eq!(fields.dob, "15/08/1990");
        assert_eq!(fields.age, Some(35));
        assert_eq!(fields.prefix, "นาง");
    }

    #[test]
    fn test_date_then_name() {
        // Forward scan still finds both; no fallback involved
        let fields = positional(extractor().extract("15/08/1990\nJOHN SMITH"));
        assert_eq!(fields.name, "JOHN SMITH");
        assert_eq!(fields.dob, "15/08/1990");
    }

    #[test]
    fn test_first_non_date_line_wins_as_name() {
        let fields = positional(extractor().extract("ANNA\nBELLA\n01/01/2000"));
        assert_eq!(fields.name, "ANNA");
        assert_eq!(fields.dob, "01/01/2000");
    }

    #[test]
    fn test_first_date_line_wins_as_dob() {
        let fields = positional(extractor().extract("01/01/2000\n02/02/2002"));
        assert_eq!(fields.dob, "01/01/2000");
        assert_eq!(fields.name, "");
        assert_eq!(fields.prefix, "");
    }

    #[test]
    fn test_dash_and_dot_separators_are_normalized() {
        let fields = positional(extractor().extract("JOHN SMITH\n15-08-1990"));
        assert_eq!(fields.dob, "15/08/1990");

        let fields = positional(extractor().extract("JOHN SMITH\n15.08.1990"));
        assert_eq!(fields.dob, "15/08/1990");
    }

    #[test]
    fn test_last_line_fallback_overrides_name() {
        // No line is purely a date, so the forward scan finds none; the last
        // line carries one with noise around it and the second-to-last line
        // replaces the earlier name pick.
        let fields = positional(extractor().extract("THAI NATIONAL ID\nMR JOHN\nBORN 15/08/1990 X"));
        assert_eq!(fields.dob, "15/08/1990");
        assert_eq!(fields.name, "MR JOHN");
        assert_eq!(fields.prefix, "นาย");
    }

    #[test]
    fn test_fallback_needs_two_lines() {
        let fields = positional(extractor().extract("BORN 15/08/1990 X"));
        assert_eq!(fields.dob, "");
        assert_eq!(fields.name, "BORN 15/08/1990 X");
    }

    #[test]
    fn test_unparseable_date_line_keeps_text_but_no_age() {
        let fields = positional(extractor().extract("31/02/2000\nJANE"));
        assert_eq!(fields.dob, "31/02/2000");
        assert_eq!(fields.age, None);
        assert_eq!(fields.name, "JANE");
        // No marker and no usable age
        assert_eq!(fields.prefix, "");
    }

    #[test]
    fn test_empty_input() {
        let fields = positional(extractor().extract(""));
        assert_eq!(fields, PositionalFields::default());

        let fields = positional(extractor().extract("  \n\t \n"));
        assert_eq!(fields, PositionalFields::default());
    }
}
