/// Base year of the internal offset convention (the historical tm_year base).
pub const BASE_YEAR: i32 = 1900;

/// Days between 1900-01-01 and the 1970-01-01 epoch.
pub const DAYS_BASE_TO_EPOCH: i64 = 25567;

/// Epoch day zero, 1970-01-01, was a Thursday.
pub const EPOCH_WEEKDAY: u8 = 4;

/// Earliest representable year (the epoch year).
pub const MIN_YEAR: i32 = 1970;

/// Forward search horizon: latest year the decoder will walk to.
pub const MAX_YEAR: i32 = 9999;

/// Seconds per civil day (no leap seconds).
pub const SECS_PER_DAY: i64 = 86400;

/// Days from start of year until start of each month (non-leap years).
pub const DAYS_TO_MONTH_START: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Per-month adjustment for the Gregorian weekday congruence.
pub(crate) const WEEKDAY_MONTH_OFFSET: [u8; 12] = [1, 4, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

/// Short weekday names, 0 = Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
