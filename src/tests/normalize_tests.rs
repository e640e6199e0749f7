#[cfg(test)]
mod tests {
    use crate::extraction::normalize::{non_empty_lines, normalize, normalize_date_separators};

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a  b\t\tc\n\nd"), "a b c d");
        assert_eq!(normalize("  leading and trailing  "), "leading and trailing");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n  "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "already normal",
            "  a \t b \r\n c  ",
            "ชื่อ:  นางสาว   สมหญิง",
            "MR.\nJOHN\nDOE",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_no_double_whitespace_remains() {
        let normalized = normalize("a  b\tc\r\nd   e");
        assert!(!normalized.contains("  "));
        assert!(!normalized.contains('\t'));
        assert!(!normalized.contains('\n'));
        assert_eq!(normalized, normalized.trim());
    }

    #[test]
    fn test_non_empty_lines_trims_and_drops_blanks() {
        let lines = non_empty_lines("  JOHN SMITH  \n\n\t\n 15/08/1990 \n");
        assert_eq!(lines, vec!["JOHN SMITH", "15/08/1990"]);
    }

    #[test]
    fn test_non_empty_lines_empty_input() {
        assert!(non_empty_lines("").is_empty());
        assert!(non_empty_lines("\n \n\t").is_empty());
    }

    #[test]
    fn test_date_separator_normalization() {
        assert_eq!(normalize_date_separators("15-08-1990"), "15/08/1990");
        assert_eq!(normalize_date_separators("15.08.1990"), "15/08/1990");
        assert_eq!(normalize_date_separators("15/08/1990"), "15/08/1990");
    }
}
