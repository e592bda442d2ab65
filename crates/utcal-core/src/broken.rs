//! Broken-down civil UTC time with validated fields.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::constants::{DAYS_TO_MONTH_START, MAX_YEAR, MIN_YEAR};
use crate::error::{CalendarError, Result};
use crate::gregorian::{day_of_week, days_in_month, is_leap_year};

/// A civil UTC instant broken down into calendar fields.
///
/// The primary fields (year, month, day, hour, minute, second) are
/// validated at construction and immutable afterwards. Weekday and
/// day-of-year are always recomputed from the primary fields, never
/// stored, so they cannot be set out of sync. Every value is
/// independently owned — nothing here aliases shared state.
///
/// Months are zero-based ([0,11]) to match the broken-down convention;
/// days of month are one-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrokenDownTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl BrokenDownTime {
    /// Build a broken-down time, rejecting any out-of-range field with
    /// [`CalendarError::InvalidDate`]. No silent normalization: day 29
    /// in a non-leap February is an error, not March 1st.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidDate {
                field: "year",
                value: i64::from(year),
            });
        }
        if month > 11 {
            return Err(CalendarError::InvalidDate {
                field: "month",
                value: i64::from(month),
            });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate {
                field: "day",
                value: i64::from(day),
            });
        }
        if hour > 23 {
            return Err(CalendarError::InvalidDate {
                field: "hour",
                value: i64::from(hour),
            });
        }
        if minute > 59 {
            return Err(CalendarError::InvalidDate {
                field: "minute",
                value: i64::from(minute),
            });
        }
        if second > 59 {
            return Err(CalendarError::InvalidDate {
                field: "second",
                value: i64::from(second),
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Full calendar year, e.g. 2024.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, zero-based ([0,11]).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, one-based ([1,31]).
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Weekday via the Gregorian congruence, 0 = Sunday. Recomputed on
    /// every call.
    pub fn day_of_week(&self) -> u8 {
        day_of_week(self.year, self.month, self.day)
    }

    /// Zero-based day of year ([0,365]). Recomputed on every call from
    /// the cumulative month table, +1 from March onward in leap years.
    pub fn day_of_year(&self) -> u16 {
        let mut yday = u16::from(self.day - 1) + DAYS_TO_MONTH_START[self.month as usize];
        if self.month >= 2 && is_leap_year(self.year) {
            yday += 1;
        }
        yday
    }
}

/// Renders `YYYY-MM-DD HH:MM:SS UTC` with a one-based month.
impl fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// Serializes with a one-based month and the derived weekday/yday
/// included, so downstream JSON carries the full broken-down view.
impl Serialize for BrokenDownTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("BrokenDownTime", 8)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &(self.month + 1))?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.serialize_field("second", &self.second)?;
        s.serialize_field("weekday", &self.day_of_week())?;
        s.serialize_field("yday", &self.day_of_year())?;
        s.end()
    }
}
