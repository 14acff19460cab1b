//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month/day combination is not a real calendar date.
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// Year is outside the window the solar formulas are valid for.
    YearOutOfRange(i32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::YearOutOfRange(year) => write!(
                f,
                "year {year} outside supported range {}-{}",
                crate::MIN_SUPPORTED_YEAR,
                crate::MAX_SUPPORTED_YEAR
            ),
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date() {
        let e = TimeError::InvalidCalendarDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-29");
    }

    #[test]
    fn display_year_range() {
        let e = TimeError::YearOutOfRange(1900);
        assert_eq!(e.to_string(), "year 1900 outside supported range 1950-2049");
    }
}
