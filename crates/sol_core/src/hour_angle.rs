//! Hour angle, mean time, apparent solar time and sidereal time.
//!
//! Combines the time of day, the Equation of Time and the Sun's right
//! ascension with an observer longitude. Every output is in hours, wrapped
//! into [0, 24) with [`correct`]; split into minutes and seconds with
//! [`sol_math::hours_to_hms`].

use log::debug;
use sol_math::{DEGREES_PER_HOUR, correct};
use sol_time::DayOffset;

use crate::error::SolarError;
use crate::sun::SolarCoordinates;

/// Observer position for local times: a fixed longitude, not a time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geographic longitude in degrees, east positive, west negative.
    /// Range: [-180, 180].
    pub longitude_deg: f64,
}

impl Observer {
    /// Observer on the Greenwich meridian.
    pub const GREENWICH: Self = Self { longitude_deg: 0.0 };

    /// Create an observer, rejecting non-finite or out-of-range longitudes.
    pub fn new(longitude_deg: f64) -> Result<Self, SolarError> {
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLongitude(longitude_deg));
        }
        Ok(Self { longitude_deg })
    }

    /// Longitude expressed as a time offset from Greenwich, in hours.
    pub fn offset_hours(&self) -> f64 {
        self.longitude_deg / DEGREES_PER_HOUR
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::GREENWICH
    }
}

/// Derived time quantities for one instant and observer, in hours [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTimes {
    /// Greenwich hour angle of the true Sun.
    pub greenwich_hour_angle: f64,
    /// Greenwich mean (clock) time.
    pub greenwich_mean_time: f64,
    /// Greenwich mean sidereal time.
    pub greenwich_sidereal_time: f64,
    /// Apparent (sundial) solar time at Greenwich.
    pub apparent_solar_time: f64,
    /// Local hour angle of the true Sun.
    pub local_hour_angle: f64,
    /// Local mean time.
    pub local_mean_time: f64,
    /// Local mean sidereal time.
    pub local_sidereal_time: f64,
    /// Local apparent solar time.
    pub local_apparent_time: f64,
}

impl SolarTimes {
    /// Compose the time quantities.
    ///
    /// The fractional part of `day_offset` is the time elapsed since the
    /// latest Greenwich noon (the astronomical day). A civil [`DayOffset`]
    /// is converted with [`DayOffset::astronomical`]; [`SolarTimes::at`]
    /// does both steps.
    pub fn compute(sun: &SolarCoordinates, day_offset: f64, observer: &Observer) -> Self {
        let mean_time = (day_offset - day_offset.floor()) * 24.0;
        let eot_hours = sun.equation_of_time_min / 60.0;
        let ra = sun.right_ascension_hours;
        let offset = observer.offset_hours();

        let gha = correct(mean_time + eot_hours);
        let gmt = correct(mean_time - 12.0);
        let lha = correct(gha + offset);

        let times = Self {
            greenwich_hour_angle: gha,
            greenwich_mean_time: gmt,
            greenwich_sidereal_time: correct(gha + ra),
            apparent_solar_time: correct(gha - 12.0),
            local_hour_angle: lha,
            local_mean_time: correct(gmt + offset),
            local_sidereal_time: correct(lha + ra),
            local_apparent_time: correct(lha - 12.0),
        };
        debug!(
            "solar times at {day_offset:.5} (lon {}): GHA {gha:.4} h, GMT {gmt:.4} h",
            observer.longitude_deg
        );
        times
    }

    /// Solar coordinates and time quantities at a civil [`DayOffset`].
    pub fn at(
        offset: DayOffset,
        observer: &Observer,
    ) -> Result<(SolarCoordinates, Self), SolarError> {
        let sun = SolarCoordinates::at(offset)?;
        let times = Self::compute(&sun, offset.astronomical().days(), observer);
        Ok((sun, times))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun::sun_position;

    fn hours_close(a: f64, b: f64, tol: f64) -> bool {
        let d = (a - b).rem_euclid(24.0);
        d < tol || 24.0 - d < tol
    }

    #[test]
    fn observer_validation() {
        assert!(Observer::new(-75.0).is_ok());
        assert!(Observer::new(180.0).is_ok());
        assert_eq!(
            Observer::new(181.0),
            Err(SolarError::InvalidLongitude(181.0))
        );
        assert!(Observer::new(f64::NAN).is_err());
    }

    #[test]
    fn observer_offset() {
        let obs = Observer::new(-75.0).unwrap();
        assert!((obs.offset_hours() + 5.0).abs() < 1e-12);
        assert_eq!(Observer::default(), Observer::GREENWICH);
    }

    #[test]
    fn epoch_midnight_greenwich() {
        let sun = sun_position(0.0).unwrap();
        // Midnight is half an astronomical day after the previous noon.
        let t = SolarTimes::compute(&sun, -0.5, &Observer::GREENWICH);
        assert!((t.greenwich_mean_time - 0.0).abs() < 1e-9);
        assert!((t.greenwich_hour_angle - 11.944_94).abs() < 1e-4);
        assert!((t.apparent_solar_time - 23.944_94).abs() < 1e-4);
        // GMST at 2000-01-01 0h UT is about 6h 39.9m.
        assert!(
            (t.greenwich_sidereal_time - 6.664).abs() < 0.1,
            "GMST = {}",
            t.greenwich_sidereal_time
        );
    }

    #[test]
    fn local_times_west() {
        let sun = sun_position(0.0).unwrap();
        let obs = Observer::new(-75.0).unwrap();
        let t = SolarTimes::compute(&sun, -0.5, &obs);
        assert!((t.local_mean_time - 19.0).abs() < 1e-9);
        assert!((t.local_hour_angle - 6.944_94).abs() < 1e-4);
        assert!((t.local_apparent_time - 18.944_94).abs() < 1e-4);
        assert!(hours_close(
            t.local_sidereal_time,
            t.greenwich_sidereal_time - 5.0,
            1e-9
        ));
    }

    #[test]
    fn mean_time_literal_formula() {
        let sun = sun_position(10.25).unwrap();
        let t = SolarTimes::compute(&sun, 10.25, &Observer::GREENWICH);
        assert!((t.greenwich_mean_time - 18.0).abs() < 1e-9);
        let expected = correct(6.0 + sun.equation_of_time_min / 60.0);
        assert!((t.greenwich_hour_angle - expected).abs() < 1e-12);
    }

    #[test]
    fn all_outputs_in_range() {
        let obs = Observer::new(151.2).unwrap();
        let mut n = -400.0;
        while n < 400.0 {
            let sun = sun_position(n).unwrap();
            let t = SolarTimes::compute(&sun, n, &obs);
            for h in [
                t.greenwich_hour_angle,
                t.greenwich_mean_time,
                t.greenwich_sidereal_time,
                t.apparent_solar_time,
                t.local_hour_angle,
                t.local_mean_time,
                t.local_sidereal_time,
                t.local_apparent_time,
            ] {
                assert!((0.0..24.0).contains(&h), "{h} out of range at n = {n}");
            }
            n += 3.7;
        }
    }

    #[test]
    fn local_hour_angle_round_trip() {
        let sun = sun_position(1234.6).unwrap();
        for lon in [-179.5, -75.0, 0.0, 13.4, 180.0] {
            let obs = Observer::new(lon).unwrap();
            let t = SolarTimes::compute(&sun, 1234.6, &obs);
            let back = correct(t.local_hour_angle - obs.offset_hours());
            assert!(
                hours_close(back, t.greenwich_hour_angle, 1e-9),
                "lon {lon}: {back} vs {}",
                t.greenwich_hour_angle
            );
        }
    }

    #[test]
    fn at_uses_astronomical_day() {
        // 2000-01-01 12:00 UTC: mean Sun on the Greenwich meridian.
        let (sun, t) = SolarTimes::at(DayOffset::from_days(0.5), &Observer::GREENWICH).unwrap();
        assert!((t.greenwich_mean_time - 12.0).abs() < 1e-9);
        assert!(hours_close(
            t.greenwich_hour_angle,
            sun.equation_of_time_min / 60.0,
            1e-9
        ));
    }

    #[test]
    fn at_propagates_range_error() {
        assert!(SolarTimes::at(DayOffset::from_days(20_000.0), &Observer::GREENWICH).is_err());
    }
}
