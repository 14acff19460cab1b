//! Tropical zodiac sign of an ecliptic longitude.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Aries at the March equinox point.

use sol_math::normalize_360;

/// The 12 tropical zodiac signs, starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in ecliptic order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

/// Sign and position within it for an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Decimal degrees into the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Zodiac sign containing `longitude_deg`.
pub fn sign_from_longitude(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let idx = (lon / 30.0).floor() as usize;
    SignPosition {
        sign: ALL_SIGNS[idx],
        degrees_in_sign: lon - idx as f64 * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_boundaries() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            let pos = sign_from_longitude(i as f64 * 30.0);
            assert_eq!(pos.sign, *sign, "boundary at {} deg", i * 30);
            assert!(pos.degrees_in_sign.abs() < 1e-10);
        }
    }

    #[test]
    fn mid_sign() {
        let pos = sign_from_longitude(280.4);
        assert_eq!(pos.sign, ZodiacSign::Capricorn);
        assert!((pos.degrees_in_sign - 10.4).abs() < 1e-10);
    }

    #[test]
    fn wraps_around() {
        assert_eq!(sign_from_longitude(365.0).sign, ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(-10.0).sign, ZodiacSign::Pisces);
    }

    #[test]
    fn just_below_full_turn_is_pisces() {
        for lon in [359.999_999_999, -1e-12, 720.0 - 1e-9] {
            let pos = sign_from_longitude(lon);
            assert_eq!(pos.sign, ZodiacSign::Pisces, "{lon}");
            assert!(pos.degrees_in_sign < 30.0);
        }
    }

    #[test]
    fn names_nonempty() {
        for sign in ALL_SIGNS {
            assert!(!sign.name().is_empty());
        }
    }
}
