//! Calendar date validation and whole-day offsets from the epoch.
//!
//! The leap-year rule is "divisible by 4". It disagrees with the Gregorian
//! calendar only for century years not divisible by 400, none of which
//! fall inside the supported 1950-2049 window.

use log::debug;

use crate::error::TimeError;
use crate::julian::{EPOCH_JD, calendar_to_jd};

/// First year the solar formulas are used for.
pub const MIN_SUPPORTED_YEAR: i32 = 1950;

/// Last year the solar formulas are used for.
pub const MAX_SUPPORTED_YEAR: i32 = 2049;

/// A calendar date (proleptic Gregorian, UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// Month, 1 = January.
    pub month: u32,
    /// Day of month, starting at 1.
    pub day: u32,
}

impl CalendarDate {
    /// Create a validated calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        if checkdate(&date) {
            Ok(date)
        } else {
            Err(TimeError::InvalidCalendarDate { year, month, day })
        }
    }

    /// Check that the year lies in the supported 1950-2049 window.
    pub fn check_supported_year(&self) -> Result<(), TimeError> {
        if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&self.year) {
            Ok(())
        } else {
            Err(TimeError::YearOutOfRange(self.year))
        }
    }

    /// Whole days from the epoch to this date's midnight. See [`ddays`].
    pub fn days_since_epoch(&self) -> i64 {
        ddays(self)
    }

    /// Day of the year, 1 = January 1st.
    pub fn day_of_year(&self) -> u32 {
        let jan1 = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        (ddays(self) - ddays(&jan1) + 1) as u32
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Leap year under the divisible-by-4 rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        4 | 6 | 9 | 11 => Some(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        _ => None,
    }
}

/// Whether a month/day combination exists in the given year.
pub fn checkdate(date: &CalendarDate) -> bool {
    if date.day < 1 {
        return false;
    }
    match days_in_month(date.year, date.month) {
        Some(last) => date.day <= last,
        None => false,
    }
}

/// Whole days from 2000-01-01T00:00Z to UTC midnight of `date`.
///
/// Negative before the epoch. The date is not validated: check it with
/// [`checkdate`] first. Invalid dates roll over arithmetically and never
/// panic.
pub fn ddays(date: &CalendarDate) -> i64 {
    let jd = calendar_to_jd(date.year, date.month, date.day as f64);
    let days = (jd - EPOCH_JD).trunc() as i64;
    debug!("ddays: {date} -> JD {jd:.1} -> {days} d");
    days
}
