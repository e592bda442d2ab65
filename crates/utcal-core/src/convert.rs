//! Encoder and decoder between broken-down UTC time and epoch seconds.
//!
//! Two directions of the same mapping: `to_epoch_seconds` is total over
//! the validated [`BrokenDownTime`] domain, `from_epoch_seconds` covers
//! non-negative seconds up to the end of year 9999. Round-tripping is
//! held exact by the integration tests.

use crate::broken::BrokenDownTime;
use crate::constants::{BASE_YEAR, DAYS_BASE_TO_EPOCH, MAX_YEAR, MIN_YEAR, SECS_PER_DAY};
use crate::error::{CalendarError, Result};
use crate::gregorian::{
    days_in_month, days_in_year, leap_years_through, weekday_from_epoch_days, weekday_name,
};

/// Seconds since 1970-01-01T00:00:00Z for a broken-down time.
///
/// Cannot fail: construction already validated every field.
pub fn to_epoch_seconds(t: &BrokenDownTime) -> i64 {
    let yday = i64::from(t.day_of_year());
    let offset = t.year() - BASE_YEAR;
    let days = yday + 365 * i64::from(offset) - DAYS_BASE_TO_EPOCH
        + i64::from(leap_years_through(offset - 1));
    let secs_of_day =
        (i64::from(t.hour()) * 60 + i64::from(t.minute())) * 60 + i64::from(t.second());
    let seconds = days * SECS_PER_DAY + secs_of_day;

    tracing::trace!(
        "encode {t} => {seconds} ({}, day {yday})",
        weekday_name(t.day_of_week())
    );
    seconds
}

/// Decode epoch seconds into a freshly owned broken-down time.
///
/// Keeps the documented linear forward search over years and months;
/// the year-9999 horizon bounds the loop. Negative input is outside the
/// domain and rejected up front rather than underflowing.
pub fn from_epoch_seconds(secs: i64) -> Result<BrokenDownTime> {
    if secs < 0 {
        return Err(CalendarError::OutOfRange(secs));
    }
    let epoch_days = secs / SECS_PER_DAY;
    let mut rem = secs % SECS_PER_DAY;

    let second = (rem % 60) as u8;
    rem /= 60;
    let minute = (rem % 60) as u8;
    let hour = (rem / 60) as u8;

    // Walk forward from 1970, consuming whole years
    let mut year = MIN_YEAR;
    let mut day = epoch_days;
    loop {
        let len = i64::from(days_in_year(year));
        if day < len {
            break;
        }
        day -= len;
        year += 1;
        if year > MAX_YEAR {
            return Err(CalendarError::OutOfRange(secs));
        }
    }

    // Then whole months within the found year
    let mut month: u8 = 0;
    while month < 11 {
        let len = i64::from(days_in_month(year, month));
        if day < len {
            break;
        }
        day -= len;
        month += 1;
    }

    let t = BrokenDownTime::new(year, month, (day + 1) as u8, hour, minute, second)?;
    debug_assert_eq!(t.day_of_week(), weekday_from_epoch_days(epoch_days));

    tracing::trace!(
        "decode {secs} => {t} ({}, day {})",
        weekday_name(weekday_from_epoch_days(epoch_days)),
        t.day_of_year()
    );
    Ok(t)
}
