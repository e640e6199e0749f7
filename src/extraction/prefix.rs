pub const PREFIX_MR: &str = "นาย";
pub const PREFIX_MRS: &str = "นาง";
pub const PREFIX_MISS: &str = "นางสาว";

/// Name fragments that mark the holder as male when no explicit honorific is
/// present. Tuned to Myanmar given names as they appear on the cards this
/// service processes; matches are plain substrings, not word-bounded.
const MALE_NAME_TOKENS: [&str; 5] = ["BO", "MIN", "OO", "TIN", "HTAY"];

/// Best-effort honorific for an extracted name.
///
/// Checks explicit Western honorific markers first, then falls back to the
/// male token list plus an age split (30 and over reads as married). Returns
/// the empty string when the name is empty, or when the age is unknown and no
/// marker matched. Advisory only; never an identity claim.
pub fn guess_prefix(name: &str, age: Option<i32>) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let upper = name.to_uppercase();
    if upper.contains("MR.") || upper.contains("MR ") {
        return PREFIX_MR.to_string();
    }
    if upper.contains("MRS.") || upper.contains("MRS ") {
        return PREFIX_MRS.to_string();
    }
    if upper.contains("MISS") {
        return PREFIX_MISS.to_string();
    }
    if upper.contains("MS.") || upper.contains("MS ") {
        return PREFIX_MISS.to_string();
    }

    let Some(age) = age else {
        return String::new();
    };

    if MALE_NAME_TOKENS.iter().any(|token| upper.contains(token)) {
        PREFIX_MR.to_string()
    } else if age >= 30 {
        PREFIX_MRS.to_string()
    } else {
        PREFIX_MISS.to_string()
    }
}
