//! Error types for the solar model.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sol_time::TimeError;

/// Errors from the solar position model and hour-angle composition.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Day offset outside the formulas' accuracy window (or not finite).
    OutOfRange(f64),
    /// Day of year past 366 for the approximate Equation of Time.
    DayOfYearOutOfRange(u32),
    /// Observer longitude not finite or outside [-180, 180] degrees.
    InvalidLongitude(f64),
    /// Error from calendar conversion.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(n) => write!(
                f,
                "day offset {n} outside ±{} days of 2000-01-01",
                crate::MAX_DAY
            ),
            Self::DayOfYearOutOfRange(doy) => write!(f, "day of year {doy} exceeds 366"),
            Self::InvalidLongitude(lon) => {
                write!(f, "invalid longitude: {lon} (expected -180..180 degrees)")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SolarError {}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
