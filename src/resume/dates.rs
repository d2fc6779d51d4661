use chrono::{Datelike, NaiveDate};

/// Whole years elapsed from `start` to `end`.
///
/// The calendar difference is reduced by one while the anniversary has not
/// been reached: months are compared first and days only break a tie between
/// equal months. A 29 February start therefore has its anniversary on
/// 1 March in non-leap years.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let before_anniversary = if end.month() != start.month() {
        end.month() < start.month()
    } else {
        end.day() < start.day()
    };

    if before_anniversary {
        years - 1
    } else {
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn same_day_is_zero_years() {
        let day = date(1993, 7, 31);
        assert_eq!(years_between(day, day), 0);
    }

    #[test]
    fn anniversary_counts_full_year() {
        assert_eq!(years_between(date(1993, 7, 31), date(1994, 7, 31)), 1);
        assert_eq!(years_between(date(1993, 7, 31), date(2026, 7, 31)), 33);
    }

    #[test]
    fn day_before_anniversary_is_one_less() {
        assert_eq!(years_between(date(1993, 7, 31), date(2026, 7, 30)), 32);
    }

    #[test]
    fn earlier_month_ignores_day() {
        assert_eq!(years_between(date(1993, 7, 1), date(2026, 6, 30)), 32);
        assert_eq!(years_between(date(1993, 7, 31), date(2026, 8, 1)), 33);
    }

    #[test]
    fn leap_day_start_waits_for_march_in_common_years() {
        let start = date(2000, 2, 29);
        assert_eq!(years_between(start, date(2001, 2, 28)), 0);
        assert_eq!(years_between(start, date(2001, 3, 1)), 1);
        assert_eq!(years_between(start, date(2004, 2, 29)), 4);
    }

    #[test]
    fn end_before_start_goes_negative() {
        assert_eq!(years_between(date(2020, 5, 10), date(2019, 5, 11)), -1);
    }
}
