#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::extraction::age::age_from_dob;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_already_passed_this_year() {
        assert_eq!(age_from_dob("01/01/1995", day(2026, 8, 7)), Some(31));
    }

    #[test]
    fn test_birthday_not_yet_reached_this_year() {
        assert_eq!(age_from_dob("15/08/1990", day(2026, 8, 7)), Some(35));
    }

    #[test]
    fn test_birthday_today_counts_as_reached() {
        assert_eq!(age_from_dob("15/08/1990", day(2026, 8, 15)), Some(36));
        assert_eq!(age_from_dob("15/08/1990", day(2026, 8, 14)), Some(35));
    }

    #[test]
    fn test_age_is_year_difference_or_one_less() {
        let today = day(2026, 8, 7);
        for dob in ["01/01/1990", "31/12/1990", "07/08/1990", "08/08/1990"] {
            let age = age_from_dob(dob, today).unwrap();
            assert!(age == 36 || age == 35, "age {} out of range for {}", age, dob);
        }
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(age_from_dob("31/02/2000", day(2026, 8, 7)), None);
    }

    #[test]
    fn test_non_numeric_components() {
        assert_eq!(age_from_dob("aa/bb/cccc", day(2026, 8, 7)), None);
        assert_eq!(age_from_dob("", day(2026, 8, 7)), None);
    }

    #[test]
    fn test_year_first_order_is_rejected() {
        assert_eq!(age_from_dob("1990/08/15", day(2026, 8, 7)), None);
    }

    #[test]
    fn test_wrong_separator_is_rejected() {
        assert_eq!(age_from_dob("15-08-1990", day(2026, 8, 7)), None);
    }

    #[test]
    fn test_single_digit_day_and_month() {
        assert_eq!(age_from_dob("5/8/1990", day(2026, 8, 7)), Some(35));
    }

    #[test]
    fn test_wall_clock_variant() {
        use crate::extraction::age::age_from_dob_today;

        let age = age_from_dob_today("01/01/1990").unwrap();
        assert!(age >= 35);
        assert_eq!(age_from_dob_today("31/02/2000"), None);
    }
}
