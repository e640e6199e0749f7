use chrono::{Datelike, NaiveDate};

/// Age in whole years at `today` for a `DD/MM/YYYY` date of birth.
///
/// Day comes first, then month, then year. Anything that does not parse as a
/// real calendar date (non-numeric components, `31/02/...`, stray separators)
/// yields `None`; callers log the warning.
pub fn age_from_dob(dob: &str, today: NaiveDate) -> Option<i32> {
    let birth = NaiveDate::parse_from_str(dob.trim(), "%d/%m/%Y").ok()?;
    let mut age = today.year() - birth.year();
    // Birthday not yet reached this year
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// Age relative to the wall clock. Tests should go through [`age_from_dob`]
/// with a pinned reference date instead.
pub fn age_from_dob_today(dob: &str) -> Option<i32> {
    age_from_dob(dob, chrono::Local::now().date_naive())
}
