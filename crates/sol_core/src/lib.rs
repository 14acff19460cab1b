//! Low-precision solar ephemeris near J2000.
//!
//! This crate provides:
//! - The Astronomical Almanac low-precision Sun formulas (`sun_position`)
//! - An orbit-and-tilt approximation of the Equation of Time
//! - Hour angle, mean, apparent and sidereal time for an observer longitude
//!
//! Accuracy (1950-2050): RA/Dec about 1', Equation of Time about 3.5 s.

pub mod approx;
pub mod error;
pub mod hour_angle;
pub mod sun;

pub use approx::equation_of_time_approx;
pub use error::SolarError;
pub use hour_angle::{Observer, SolarTimes};
pub use sun::{MAX_DAY, SolarCoordinates, sun_position, year_series};
