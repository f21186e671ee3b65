//! Rashi (zodiac sign) enum and the Moon longitude resolver.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. A Moon position given as a sign
//! number and degrees within the sign resolves to an absolute longitude.

use tracing::{debug, warn};

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for a 1-based sign number.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(ALL_RASHIS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Rashi containing a sidereal longitude (wraps modulo 360).
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let idx = ((normalize_360(sidereal_lon_deg) / 30.0).floor() as usize).min(11);
        ALL_RASHIS[idx]
    }

    /// Longitude of the first degree of this rashi.
    pub fn start_longitude(self) -> f64 {
        (self as u8) as f64 * 30.0
    }
}

/// Resolve the Moon's absolute ecliptic longitude from a sign number and
/// degrees within the sign.
///
/// Lenient by contract: a sign that is absent, non-finite or outside 1..=12
/// becomes 1 (fractional signs truncate), and degrees that are absent,
/// non-finite or negative become 0. Degrees above 30 are added as-is.
pub fn moon_longitude_from_rashi(sign: Option<f64>, degrees: Option<f64>) -> f64 {
    let rashi = match sign {
        Some(s) => rashi_from_sign_number(s).unwrap_or_else(|| {
            warn!(sign = s, "rashi number out of range, using 1");
            Rashi::Mesha
        }),
        None => Rashi::Mesha,
    };
    let degrees = match degrees {
        Some(d) if d.is_finite() && d >= 0.0 => d,
        Some(d) => {
            warn!(degrees = d, "degrees within rashi invalid, using 0");
            0.0
        }
        None => 0.0,
    };
    let lon = rashi.start_longitude() + degrees;
    debug!(sign = rashi.number(), degrees, lon, "resolved moon longitude");
    lon
}

/// Rashi for a possibly fractional sign number; the fraction is dropped.
fn rashi_from_sign_number(s: f64) -> Option<Rashi> {
    if s.is_finite() && (1.0..13.0).contains(&s) {
        Rashi::from_number(s.trunc() as u8)
    } else {
        None
    }
}
