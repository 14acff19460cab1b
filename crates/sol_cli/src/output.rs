//! Human-readable rendering of solar coordinates and times.

use sol_core::{Observer, SolarCoordinates, SolarTimes};
use sol_math::{
    HOURS_PER_DAY, deg_to_dms, deg_to_dms_rounded, hours_to_hms, hours_to_hms_rounded,
};
use sol_time::DayOffset;

use crate::zodiac::sign_from_longitude;

/// Which optional sections to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub all: bool,
    pub day: bool,
    pub julian: bool,
    pub zodiac: bool,
    pub exact: bool,
}

/// Format an hour value as `hh:mm`, or `hh:mm:ss.s` when `exact`.
///
/// Minutes are truncated; exact seconds are rounded to 0.1 s, wrapping
/// 23:59:59.97 to 00:00:00.0.
pub fn format_hours(hours: f64, exact: bool) -> String {
    if exact {
        let t = hours_to_hms_rounded(hours, 1);
        let h = t.hours % HOURS_PER_DAY as u32;
        format!("{h:02}:{:02}:{:04.1}", t.minutes, t.seconds)
    } else {
        let t = hours_to_hms(hours);
        format!("{:02}:{:02}", t.hours, t.minutes)
    }
}

/// Format an angle as `±d° mm'`, or with arc-seconds when `exact`.
pub fn format_degrees(deg: f64, exact: bool) -> String {
    if exact {
        deg_to_dms_rounded(deg, 1).to_string()
    } else {
        let d = deg_to_dms(deg);
        let sign = if d.negative { "-" } else { "" };
        format!("{sign}{}° {:02}'", d.degrees, d.minutes)
    }
}

/// Format the Equation of Time as signed minutes and seconds.
pub fn format_equation_of_time(minutes: f64) -> String {
    let sign = if minutes < 0.0 { "-" } else { "+" };
    let t = hours_to_hms_rounded(minutes.abs() / 60.0, 1);
    let whole_minutes = t.hours * 60 + t.minutes as u32;
    format!("{sign}{whole_minutes}m {:04.1}s", t.seconds)
}

/// Render the full report as lines of text.
pub fn render_report(
    offset: DayOffset,
    sun: &SolarCoordinates,
    times: &SolarTimes,
    observer: &Observer,
    opts: OutputOptions,
) -> Vec<String> {
    let exact = opts.exact;
    let mut lines = Vec::new();

    if opts.day {
        lines.push(format!(
            "Days since 2000-01-01:  {offset} ({} UTC)",
            format_hours(offset.time_of_day_hours(), exact)
        ));
    }
    if opts.julian {
        lines.push(format!("Julian Date:            {:.5}", offset.julian_date()));
    }

    lines.push(format!(
        "Right ascension:        {}",
        format_hours(sun.right_ascension_hours, exact)
    ));
    lines.push(format!(
        "Declination:            {}",
        format_degrees(sun.declination_deg, exact)
    ));
    lines.push(format!(
        "Equation of time:       {}",
        format_equation_of_time(sun.equation_of_time_min)
    ));

    if opts.zodiac {
        let pos = sign_from_longitude(sun.ecliptic_longitude_deg);
        lines.push(format!(
            "Zodiac:                 {} {}",
            pos.sign.name(),
            format_degrees(pos.degrees_in_sign, exact)
        ));
    }

    if opts.all {
        lines.push(format!(
            "Ecliptic longitude:     {}",
            format_degrees(sun.ecliptic_longitude_deg, exact)
        ));
        lines.push(format!("Distance:               {:.5} AU", sun.distance_au));
        lines.push(format!(
            "Greenwich hour angle:   {}",
            format_hours(times.greenwich_hour_angle, exact)
        ));
        lines.push(format!(
            "Greenwich mean time:    {}",
            format_hours(times.greenwich_mean_time, exact)
        ));
        lines.push(format!(
            "Greenwich sidereal:     {}",
            format_hours(times.greenwich_sidereal_time, exact)
        ));
        lines.push(format!(
            "Apparent solar time:    {}",
            format_hours(times.apparent_solar_time, exact)
        ));
        lines.push(format!(
            "Observer longitude:     {}",
            format_degrees(observer.longitude_deg, exact)
        ));
        lines.push(format!(
            "Local hour angle:       {}",
            format_hours(times.local_hour_angle, exact)
        ));
        lines.push(format!(
            "Local mean time:        {}",
            format_hours(times.local_mean_time, exact)
        ));
        lines.push(format!(
            "Local sidereal:         {}",
            format_hours(times.local_sidereal_time, exact)
        ));
        lines.push(format!(
            "Local apparent time:    {}",
            format_hours(times.local_apparent_time, exact)
        ));
    }
    lines
}

/// Comma-separated Equation of Time values, two decimals each.
pub fn render_graph(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v:.2},")).collect()
}
