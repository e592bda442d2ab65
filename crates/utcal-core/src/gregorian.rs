//! Shared Gregorian leaf algorithms: the leap-year rule and the two
//! independent weekday formulas.

use crate::constants::{BASE_YEAR, EPOCH_WEEKDAY, WEEKDAY_MONTH_OFFSET, WEEKDAY_NAMES};

/// Gregorian leap-year rule: divisible by 4 and not by 100, or by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Leap years elapsed from the 1900 base through the end of `offset`
/// (years since 1900). The `+300` term folds the 400-year rule into the
/// offset convention.
pub(crate) fn leap_years_through(offset: i32) -> i32 {
    offset / 4 - offset / 100 + (offset + 300) / 400
}

/// Weekday of a calendar date via the classic congruence, 0 = Sunday.
///
/// January and February count against the previous pseudo-year, so the
/// leap day never needs special-casing. Must agree with
/// [`weekday_from_epoch_days`] for every representable date; the
/// integration tests hold both formulas to that.
pub fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    let mut pseudo = year - BASE_YEAR;
    if month < 2 {
        pseudo -= 1;
    }
    let sum = pseudo
        + leap_years_through(pseudo)
        + i32::from(WEEKDAY_MONTH_OFFSET[month as usize])
        + i32::from(day);
    sum.rem_euclid(7) as u8
}

/// Weekday from a raw epoch-day count, 0 = Sunday.
pub fn weekday_from_epoch_days(days: i64) -> u8 {
    (days + i64::from(EPOCH_WEEKDAY)).rem_euclid(7) as u8
}

/// Days in `month` (zero-based) of `year`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Days in `year`: 365 or 366.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Short English name for a [0,6] weekday number.
pub fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAY_NAMES[(weekday % 7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn weekday_known_dates() {
        // Epoch day was a Thursday
        assert_eq!(day_of_week(1970, 0, 1), 4);
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(2000, 0, 1), 6);
        // 2000-02-29 was a Tuesday
        assert_eq!(day_of_week(2000, 1, 29), 2);
        // 2024-02-29 was a Thursday
        assert_eq!(day_of_week(2024, 1, 29), 4);
        // 1999-12-31 was a Friday
        assert_eq!(day_of_week(1999, 11, 31), 5);
    }

    #[test]
    fn weekday_from_days_epoch() {
        assert_eq!(weekday_from_epoch_days(0), 4);
        assert_eq!(weekday_from_epoch_days(1), 5);
        assert_eq!(weekday_from_epoch_days(3), 0);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
        let total: u16 = (0..12).map(|m| u16::from(days_in_month(2023, m))).sum();
        assert_eq!(total, 365);
        let total_leap: u16 = (0..12).map(|m| u16::from(days_in_month(2024, m))).sum();
        assert_eq!(total_leap, 366);
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn weekday_names_round() {
        assert_eq!(weekday_name(0), "Sun");
        assert_eq!(weekday_name(4), "Thu");
        assert_eq!(weekday_name(6), "Sat");
    }
}
