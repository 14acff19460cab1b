//! Angle and time normalization for the sol solar ephemeris.
//!
//! This crate provides:
//! - Floor-based floating-point modulo (`modulo`, `normalize_360`, `normalize_24`)
//! - Single-step hour wrapping into [0, 24) (`correct`)
//! - Sexagesimal splitting of fractional degrees/hours (`conv`, `Hms`, `Dms`)

pub mod normalize;
pub mod sexagesimal;

pub use normalize::{
    DEGREES_PER_HOUR, HOURS_PER_DAY, correct, modulo, normalize_24, normalize_360,
};
pub use sexagesimal::{
    Dms, Hms, conv, deg_to_dms, deg_to_dms_rounded, dms_to_deg, hms_to_hours, hours_to_hms,
    hours_to_hms_rounded,
};
