//! Sexagesimal (base-60) splitting of fractional hours and degrees.
//!
//! Minutes come from the fractional part of the whole value, seconds from
//! the fractional part of the minutes, both through [`conv`].

/// Fractional part of `value`, scaled by 60.
///
/// Uses the floor-based fraction, so the result lies in [0, 60) and only
/// depends on `value` modulo 1.
pub fn conv(value: f64) -> f64 {
    (value - value.floor()) * 60.0
}

/// Hours-minutes-seconds split of a time value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours (0..23 for a wrapped time).
    pub hours: u32,
    /// Minutes (0..59).
    pub minutes: u8,
    /// Seconds (0.0..60.0), with fractional part.
    pub seconds: f64,
}

/// Degrees-minutes-seconds split of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// True for angles below zero; the other fields hold the magnitude.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u32,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), with fractional part.
    pub seconds: f64,
}

/// Split a non-negative hour value into hours, minutes and seconds.
///
/// Negative input is split by magnitude.
pub fn hours_to_hms(hours: f64) -> Hms {
    let h = hours.abs();
    let minutes = conv(h);
    let seconds = conv(minutes);
    Hms {
        hours: h.floor() as u32,
        minutes: minutes.floor() as u8,
        seconds,
    }
}

/// Recombine an [`Hms`] into decimal hours.
pub fn hms_to_hours(hms: &Hms) -> f64 {
    hms.hours as f64 + hms.minutes as f64 / 60.0 + hms.seconds / 3600.0
}

/// Split a signed angle into degrees, arc-minutes and arc-seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let minutes = conv(d);
    let seconds = conv(minutes);
    Dms {
        negative: deg < 0.0,
        degrees: d.floor() as u32,
        minutes: minutes.floor() as u8,
        seconds,
    }
}

/// Recombine a [`Dms`] into signed decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let d = dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -d } else { d }
}

/// Round the magnitude of `value` to `decimals` places of seconds, then split.
///
/// Rounding happens on the whole value, so 59.97 s shown with one decimal
/// carries into the minutes instead of reading 60.0.
fn split_rounded(value: f64, decimals: u32) -> (u32, u8, f64) {
    let scale = 10_f64.powi(decimals as i32);
    let units = (value.abs() * 3600.0 * scale).round() as u64;
    let per_minute = 60 * 10_u64.pow(decimals);
    let per_whole = 60 * per_minute;
    let whole = (units / per_whole) as u32;
    let minutes = ((units % per_whole) / per_minute) as u8;
    let seconds = (units % per_minute) as f64 / scale;
    (whole, minutes, seconds)
}

/// Split hours after rounding to `decimals` places of seconds.
pub fn hours_to_hms_rounded(hours: f64, decimals: u32) -> Hms {
    let (hours, minutes, seconds) = split_rounded(hours, decimals);
    Hms {
        hours,
        minutes,
        seconds,
    }
}

/// Split a signed angle after rounding to `decimals` places of arc-seconds.
pub fn deg_to_dms_rounded(deg: f64, decimals: u32) -> Dms {
    let (degrees, minutes, seconds) = split_rounded(deg, decimals);
    Dms {
        negative: deg < 0.0 && (degrees, minutes, seconds) != (0, 0, 0.0),
        degrees,
        minutes,
        seconds,
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = hours_to_hms_rounded(hms_to_hours(self), 1);
        write!(f, "{:02}h {:02}m {:04.1}s", t.hours, t.minutes, t.seconds)
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = deg_to_dms_rounded(dms_to_deg(self), 1);
        let sign = if d.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}° {:02}' {:04.1}\"",
            d.degrees, d.minutes, d.seconds
        )
    }
}
