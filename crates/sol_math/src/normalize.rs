//! Wrapping of angles and hour values into their canonical ranges.

use log::warn;

/// Hours in one day; the period every time quantity wraps on.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees of rotation per hour of time (360° / 24 h).
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Floating-point modulo with floor semantics.
///
/// Returns a value in `[0, y)` for `y > 0`, whatever the sign of `x`.
/// A rounding result equal to `y` (tiny negative `x`) folds back to `0`.
pub fn modulo(x: f64, y: f64) -> f64 {
    let r = x - (x / y).floor() * y;
    if r >= y { r - y } else { r }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    modulo(deg, 360.0)
}

/// Normalize an hour value to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    modulo(hours, HOURS_PER_DAY)
}

/// Wrap an hour value into [0, 24) by adding or subtracting one day.
///
/// Callers keep the input inside (-24, 48), where a single correction is
/// enough. Anything further out is reduced with [`modulo`] so the result
/// is always in range and `correct(correct(h)) == correct(h)`.
pub fn correct(hours: f64) -> f64 {
    let h = if hours < 0.0 {
        hours + HOURS_PER_DAY
    } else if hours >= HOURS_PER_DAY {
        hours - HOURS_PER_DAY
    } else {
        hours
    };
    if (0.0..HOURS_PER_DAY).contains(&h) {
        return h;
    }
    if hours.abs() >= HOURS_PER_DAY * 2.0 {
        warn!("correct: {hours} h is outside the single-wrap range");
    }
    normalize_24(h)
}
