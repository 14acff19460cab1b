//! Approximate Equation of Time from the day of year alone.
//!
//! Models the two causes separately: the eccentric orbit, then the axial
//! tilt projecting ecliptic motion onto the equator. Good to about a
//! minute; no ephemeris needed.
//!
//! Source: Wikipedia, "Equation of time", alternative calculation.

use std::f64::consts::{PI, TAU};

use crate::error::SolarError;

/// Earth's orbital eccentricity.
const ORBITAL_ECCENTRICITY: f64 = 0.01671;

/// Earth's axial tilt in radians.
const AXIAL_TILT_RAD: f64 = 0.4091;

/// Mean orbital motion in radians per day.
const RADIANS_PER_DAY: f64 = TAU / 365.24;

/// Apparent minus mean solar time, in minutes, for a 0-based day of year.
///
/// Fails with [`SolarError::DayOfYearOutOfRange`] past day 366.
pub fn equation_of_time_approx(day_of_year: u32) -> Result<f64, SolarError> {
    if day_of_year > 366 {
        return Err(SolarError::DayOfYearOutOfRange(day_of_year));
    }
    let doy = day_of_year as f64;
    // Angle from the December solstice, then the eccentric-orbit correction.
    let a = (doy + 9.0) * RADIANS_PER_DAY;
    let b = a + 2.0 * ORBITAL_ECCENTRICITY * ((doy - 3.0) * RADIANS_PER_DAY).sin();
    let c = (a - (b.tan() / AXIAL_TILT_RAD.cos()).atan()) / PI;
    // 720 min = half a day; keep the nearest-half-turn remainder.
    Ok(720.0 * (c - (c + 0.5).floor()))
}
