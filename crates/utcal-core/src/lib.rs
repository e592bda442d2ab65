//! UTC civil-calendar conversion core.
//!
//! Converts between broken-down civil time (year/month/day plus
//! hour:minute:second, with derived weekday and day-of-year) and a linear
//! count of seconds since the 1970-01-01 epoch, Universal Time, no
//! leap-second adjustment. Supported range: 1970 through 9999.
//!
//! Zero I/O — pure calendar arithmetic with no opinions about clock
//! sources or display formatting.

pub mod broken;
pub mod constants;
pub mod convert;
pub mod error;
pub mod gregorian;

pub use broken::BrokenDownTime;
pub use constants::{
    DAYS_TO_MONTH_START, MAX_YEAR, MIN_YEAR, SECS_PER_DAY, WEEKDAY_NAMES,
};
pub use convert::{from_epoch_seconds, to_epoch_seconds};
pub use error::{CalendarError, Result};
pub use gregorian::{
    day_of_week, days_in_month, days_in_year, is_leap_year, weekday_from_epoch_days, weekday_name,
};
