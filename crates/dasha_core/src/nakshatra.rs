//! Nakshatra (lunar mansion) location for the 27-scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra is ruled by one of the nine
//! Vimshottari lords, repeating every 9 nakshatras.

use tracing::debug;

use crate::dasha::vimshottari_data::VIMSHOTTARI_GRAHAS;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra in the 27-scheme: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Vimshottari lord of this nakshatra. Nakshatras 0, 9 and 18 share a
    /// lord, and so on around the circle.
    pub const fn vimshottari_lord(self) -> Graha {
        VIMSHOTTARI_GRAHAS[(self as usize) % 9]
    }
}

/// Where a longitude falls within the 27 nakshatras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// The nakshatra containing the longitude.
    pub nakshatra: Nakshatra,
    /// 0-based index, 0..=26.
    pub index: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction: f64,
}

impl NakshatraPosition {
    /// Degrees traversed within the nakshatra.
    pub fn degrees_in_nakshatra(&self) -> f64 {
        self.fraction * NAKSHATRA_SPAN_27
    }
}

/// Locate the nakshatra and the fraction within it for a sidereal longitude.
///
/// The longitude is reduced modulo 360 first, so values past a full turn or
/// below zero wrap around.
pub fn nakshatra_position(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    // normalize_360 already bounds this; the clamp guards float edge cases
    let index = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position = lon - (index as f64) * NAKSHATRA_SPAN_27;
    let fraction = (position / NAKSHATRA_SPAN_27).clamp(0.0, 1.0);
    debug!(lon, index, fraction, "located nakshatra");

    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS_27[index as usize],
        index,
        fraction,
    }
}
