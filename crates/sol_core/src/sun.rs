//! Solar coordinates from the Astronomical Almanac low-precision formulas.
//!
//! Input is the day offset `n` from 2000-01-01T00:00Z, fractional days
//! allowed. Every call computes a fresh [`SolarCoordinates`]; nothing is
//! cached between calls.
//!
//! Source: The Astronomical Almanac, Section C, "Low precision formulas
//! for the Sun".

use log::{trace, warn};
use sol_math::{DEGREES_PER_HOUR, correct, normalize_360};
use sol_time::DayOffset;

use crate::error::SolarError;

/// Largest |n| (about 50 years) the formulas are used for.
pub const MAX_DAY: f64 = 18_262.0;

/// Minutes of time per degree of Earth rotation (1440 min / 360°).
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Position of the Sun and the Equation of Time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Right ascension in hours, range [0, 24).
    pub right_ascension_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
    /// Apparent ecliptic longitude in degrees, range [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Earth-Sun distance in AU, about 0.983 to 1.017.
    pub distance_au: f64,
    /// Apparent minus mean solar time in minutes, about -20 to +17.
    pub equation_of_time_min: f64,
}

impl SolarCoordinates {
    /// Compute the coordinates at a [`DayOffset`].
    pub fn at(offset: DayOffset) -> Result<Self, SolarError> {
        sun_position(offset.days())
    }

    /// Right ascension in degrees, range [0, 360).
    pub fn right_ascension_deg(&self) -> f64 {
        self.right_ascension_hours * DEGREES_PER_HOUR
    }
}

/// Solar coordinates `n` days after 2000-01-01T00:00Z.
///
/// Fails with [`SolarError::OutOfRange`] when `|n| > MAX_DAY` or `n` is not
/// finite.
pub fn sun_position(n: f64) -> Result<SolarCoordinates, SolarError> {
    if !n.is_finite() || n.abs() > MAX_DAY {
        warn!("sun_position: day offset {n} outside ±{MAX_DAY}");
        return Err(SolarError::OutOfRange(n));
    }

    // Mean longitude, corrected for aberration.
    let l_deg = normalize_360(280.460 + 0.985_647_4 * n);
    let l = l_deg.to_radians();

    // Mean anomaly.
    let g = normalize_360(357.528 + 0.985_600_3 * n).to_radians();

    let lambda =
        l + 1.915_f64.to_radians() * g.sin() + 0.020_f64.to_radians() * (2.0 * g).sin();

    // Obliquity of the ecliptic.
    let epsilon = (23.439 - 0.000_000_4 * n).to_radians();

    let declination_deg = (epsilon.sin() * lambda.sin()).asin().to_degrees();

    let lambda_deg = lambda.to_degrees();
    let alpha_principal = (epsilon.cos() * lambda.tan()).atan().to_degrees();
    let alpha_deg = quadrant_correct(alpha_principal, lambda_deg);

    let distance_au = 1.000_14 - 0.016_71 * g.cos() - 0.000_14 * (2.0 * g).cos();
    let equation_of_time_min = (l_deg - alpha_deg) * MINUTES_PER_DEGREE;

    trace!("sun_position({n}): L={l_deg:.4} lambda={lambda_deg:.4} alpha={alpha_deg:.4}");

    Ok(SolarCoordinates {
        right_ascension_hours: correct(alpha_deg / DEGREES_PER_HOUR),
        declination_deg,
        ecliptic_longitude_deg: correct(lambda_deg / DEGREES_PER_HOUR) * DEGREES_PER_HOUR,
        distance_au,
        equation_of_time_min,
    })
}

/// Move a principal-value `atan` result into the quadrant of `lambda_deg`.
///
/// `atan` returns (-90°, 90°); right ascension must follow the ecliptic
/// longitude through every quadrant, so half turns are added (or removed)
/// as `lambda_deg` passes ±90° and ±270°.
fn quadrant_correct(alpha_deg: f64, lambda_deg: f64) -> f64 {
    let mut alpha = alpha_deg;
    if lambda_deg > 90.0 {
        alpha += 180.0;
    }
    if lambda_deg > 270.0 {
        alpha += 180.0;
    }
    if lambda_deg < -90.0 {
        alpha -= 180.0;
    }
    if lambda_deg < -270.0 {
        alpha -= 180.0;
    }
    alpha
}

/// Solar coordinates for `days` consecutive days starting at `start`.
///
/// Each day is computed independently; the first out-of-range day fails
/// the whole series.
pub fn year_series(start: DayOffset, days: usize) -> Result<Vec<SolarCoordinates>, SolarError> {
    (0..days)
        .map(|i| sun_position(start.days() + i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_first() {
        assert_eq!(quadrant_correct(45.0, 46.0), 45.0);
    }

    #[test]
    fn quadrant_second_and_third() {
        // lambda just above 90: atan gives a value near -90
        let alpha = quadrant_correct(-89.5, 90.4);
        assert!((90.0..180.0).contains(&alpha), "alpha = {alpha}");
        let alpha = quadrant_correct(30.0, 210.0);
        assert!((180.0..270.0).contains(&alpha), "alpha = {alpha}");
    }

    #[test]
    fn quadrant_fourth() {
        let alpha = quadrant_correct(-30.0, 330.0);
        assert!((270.0..360.0).contains(&alpha), "alpha = {alpha}");
    }

    #[test]
    fn quadrant_negative_lambda() {
        let alpha = quadrant_correct(30.0, -150.0);
        assert!((-180.0..-90.0).contains(&alpha), "alpha = {alpha}");
        let alpha = quadrant_correct(60.0, -300.0);
        assert!((-360.0..-270.0).contains(&alpha), "alpha = {alpha}");
    }

    #[test]
    fn epoch_values() {
        let sun = sun_position(0.0).unwrap();
        assert!((sun.ecliptic_longitude_deg - 280.3757).abs() < 1e-3);
        assert!((sun.declination_deg - (-23.0334)).abs() < 1e-3);
        assert!((sun.distance_au - 0.983_306).abs() < 1e-5);
        assert!((sun.equation_of_time_min - (-3.3034)).abs() < 1e-3);
        assert!((sun.right_ascension_hours - 18.7524).abs() < 1e-3);
    }

    #[test]
    fn range_limits() {
        assert!(sun_position(MAX_DAY).is_ok());
        assert!(sun_position(-MAX_DAY).is_ok());
        assert_eq!(
            sun_position(MAX_DAY + 0.5),
            Err(SolarError::OutOfRange(MAX_DAY + 0.5))
        );
        assert!(sun_position(-MAX_DAY - 1.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(sun_position(f64::NAN).is_err());
        assert!(sun_position(f64::INFINITY).is_err());
    }

    #[test]
    fn ra_degrees() {
        let sun = sun_position(100.0).unwrap();
        assert!((sun.right_ascension_deg() - sun.right_ascension_hours * 15.0).abs() < 1e-12);
    }

    #[test]
    fn series_length_and_start() {
        let series = year_series(DayOffset::EPOCH, 366).unwrap();
        assert_eq!(series.len(), 366);
        assert_eq!(series[0], sun_position(0.0).unwrap());
    }

    #[test]
    fn series_fails_past_window() {
        let start = DayOffset::from_days(MAX_DAY - 10.0);
        assert!(year_series(start, 366).is_err());
    }
}
