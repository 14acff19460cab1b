//! Julian Date conversion and epoch constants.

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of J2000.0 (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the day-offset epoch, 2000-01-01T00:00Z.
pub const EPOCH_JD: f64 = 2_451_544.5;

/// POSIX time of the day-offset epoch, 2000-01-01T00:00Z.
pub const EPOCH_UNIX_SECONDS: i64 = 946_684_800;

/// Julian Date of a Gregorian calendar date.
///
/// `day_frac` may carry a time of day (`15.5` = 15th at 12:00).
/// Out-of-range months and days are not rejected; they roll over into
/// neighbouring months the way the arithmetic falls.
///
/// Source: Meeus, Astronomical Algorithms, ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_midnight() {
        assert_eq!(calendar_to_jd(2000, 1, 1.0), EPOCH_JD);
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn epoch_unix_consistent() {
        assert_eq!(EPOCH_UNIX_SECONDS % 86_400, 0);
        assert_eq!(EPOCH_UNIX_SECONDS / 86_400, 10_957);
    }
}
