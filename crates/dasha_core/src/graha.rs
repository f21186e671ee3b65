//! Vedic planet (graha) enum.
//!
//! The 9 grahas rule the dasha periods. Each graha carries its Sanskrit
//! name, English name and the two-letter abbreviation used on charts.

use serde::{Deserialize, Serialize};

/// The 9 Vedic grahas.
///
/// Serialized as the chart abbreviation (`Su`, `Ch`, `Ku`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Su")]
    Surya,
    #[serde(rename = "Ch")]
    Chandra,
    #[serde(rename = "Ku")]
    Mangal,
    #[serde(rename = "Bu")]
    Buddh,
    #[serde(rename = "Gu")]
    Guru,
    #[serde(rename = "Sk")]
    Shukra,
    #[serde(rename = "Sa")]
    Shani,
    #[serde(rename = "Ra")]
    Rahu,
    #[serde(rename = "Ke")]
    Ketu,
}

/// All 9 grahas in traditional weekday order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter chart abbreviation.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Ch",
            Self::Mangal => "Ku",
            Self::Buddh => "Bu",
            Self::Guru => "Gu",
            Self::Shukra => "Sk",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbrevs_are_distinct() {
        for (i, a) in ALL_GRAHAS.iter().enumerate() {
            for b in &ALL_GRAHAS[i + 1..] {
                assert_ne!(a.abbrev(), b.abbrev());
            }
        }
    }

    #[test]
    fn serializes_as_abbrev() {
        let s = serde_json::to_string(&Graha::Mangal).unwrap();
        assert_eq!(s, "\"Ku\"");
    }
}
