use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// A broken-down field was outside its valid range at construction.
    InvalidDate { field: &'static str, value: i64 },
    /// Epoch seconds negative or past the year-9999 horizon.
    OutOfRange(i64),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidDate { field, value } => {
                write!(f, "invalid {field}: {value}")
            }
            CalendarError::OutOfRange(secs) => {
                write!(f, "epoch seconds out of range: {secs}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let e = CalendarError::InvalidDate {
            field: "day",
            value: 31,
        };
        assert_eq!(e.to_string(), "invalid day: 31");
    }

    #[test]
    fn display_out_of_range() {
        assert_eq!(
            CalendarError::OutOfRange(-1).to_string(),
            "epoch seconds out of range: -1"
        );
    }
}
