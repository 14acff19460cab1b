//! Signed, fractional day counts from the 2000-01-01T00:00Z epoch.

use log::debug;

use crate::calendar::CalendarDate;
use crate::julian::{EPOCH_JD, EPOCH_UNIX_SECONDS, SECONDS_PER_DAY};

/// Days elapsed since 2000-01-01T00:00:00Z.
///
/// Negative before the epoch. The fractional part is the UTC time of day
/// (`0.5` = noon).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayOffset {
    days: f64,
}

impl DayOffset {
    /// The epoch itself.
    pub const EPOCH: Self = Self { days: 0.0 };

    /// Create an offset from a raw day count.
    pub fn from_days(days: f64) -> Self {
        Self { days }
    }

    /// Offset of UTC midnight on `date`.
    pub fn from_date(date: &CalendarDate) -> Self {
        Self {
            days: date.days_since_epoch() as f64,
        }
    }

    /// Offset of a UTC date and time of day.
    pub fn from_date_time(date: &CalendarDate, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac =
            hour as f64 / 24.0 + minute as f64 / 1440.0 + second / SECONDS_PER_DAY;
        Self {
            days: date.days_since_epoch() as f64 + day_frac,
        }
    }

    /// Offset of a POSIX timestamp (seconds since 1970-01-01T00:00Z).
    pub fn from_unix_seconds(seconds: f64) -> Self {
        let days = (seconds - EPOCH_UNIX_SECONDS as f64) / SECONDS_PER_DAY;
        debug!("unix {seconds} s -> day offset {days:.6}");
        Self { days }
    }

    /// Days since the epoch.
    pub fn days(self) -> f64 {
        self.days
    }

    /// Fraction of the current UTC day elapsed, in [0, 1).
    pub fn day_fraction(self) -> f64 {
        self.days - self.days.floor()
    }

    /// UTC time of day in hours, in [0, 24).
    pub fn time_of_day_hours(self) -> f64 {
        self.day_fraction() * 24.0
    }

    /// UTC midnight starting the current day.
    pub fn midnight(self) -> Self {
        Self {
            days: self.days.floor(),
        }
    }

    /// Julian Date (UTC) of this instant.
    pub fn julian_date(self) -> f64 {
        EPOCH_JD + self.days
    }

    /// The same instant counted from Greenwich noon of the epoch day.
    ///
    /// Its fractional part is the time since the latest Greenwich noon,
    /// the astronomical day used by the hour-angle formulas.
    pub fn astronomical(self) -> Self {
        Self {
            days: self.days - 0.5,
        }
    }
}

impl std::fmt::Display for DayOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5} d", self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_zero() {
        let d = CalendarDate::new(2000, 1, 1).unwrap();
        assert_eq!(DayOffset::from_date(&d), DayOffset::EPOCH);
    }

    #[test]
    fn from_date_counts_whole_days() {
        // 2049-01-01 and 2049-12-31 bracket the last supported year
        let start = CalendarDate::new(2049, 1, 1).unwrap();
        let end = CalendarDate::new(2049, 12, 31).unwrap();
        assert_eq!(DayOffset::from_date(&start).days(), 17898.0);
        assert_eq!(DayOffset::from_date(&end).days(), 18262.0);
        assert_eq!(DayOffset::from_date(&end).midnight(), DayOffset::from_date(&end));
    }

    #[test]
    fn date_time_fraction() {
        let d = CalendarDate::new(2000, 1, 2).unwrap();
        let off = DayOffset::from_date_time(&d, 18, 0, 0.0);
        assert!((off.days() - 1.75).abs() < 1e-12);
        assert!((off.time_of_day_hours() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn negative_offset_fraction() {
        // 1999-12-31T06:00Z
        let off = DayOffset::from_days(-0.75);
        assert!((off.day_fraction() - 0.25).abs() < 1e-12);
        assert_eq!(off.midnight().days(), -1.0);
    }

    #[test]
    fn unix_epoch_roundtrip() {
        let off = DayOffset::from_unix_seconds(EPOCH_UNIX_SECONDS as f64 + 43_200.0);
        assert!((off.days() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn julian_date_at_noon() {
        let off = DayOffset::from_days(0.5);
        assert!((off.julian_date() - crate::J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn astronomical_shift() {
        // 03:00 UTC is 15 h after the previous Greenwich noon.
        let off = DayOffset::from_days(10.125).astronomical();
        assert!((off.day_fraction() * 24.0 - 15.0).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(DayOffset::from_days(1.5).to_string(), "1.50000 d");
    }
}
