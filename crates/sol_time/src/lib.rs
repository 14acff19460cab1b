//! Calendar dates and day offsets from the 2000-01-01T00:00Z epoch.
//!
//! This crate provides:
//! - Calendar validation (`checkdate`) with the divisible-by-4 leap rule
//! - Whole-day offsets of a calendar date from the epoch (`ddays`)
//! - Julian Date conversion for calendar dates
//! - A `DayOffset` type carrying fractional days (time of day)

pub mod calendar;
pub mod day_offset;
pub mod error;
pub mod julian;

pub use calendar::{
    CalendarDate, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, checkdate, days_in_month, ddays,
    is_leap_year,
};
pub use day_offset::DayOffset;
pub use error::TimeError;
pub use julian::{EPOCH_JD, EPOCH_UNIX_SECONDS, J2000_JD, SECONDS_PER_DAY, calendar_to_jd};
