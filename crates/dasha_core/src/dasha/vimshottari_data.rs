//! Const data for the Vimshottari dasha system.
//!
//! A fixed cyclic graha order and the full-period length of each graha in
//! years. Every rotation (level 0 and all sub-levels) walks this order.

use crate::graha::Graha;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, in `VIMSHOTTARI_GRAHAS` order.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of one full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the Vimshottari cycle.
pub const fn cycle_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Vimshottari period of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[cycle_position(graha)]
}

/// The graha `step` places after `graha` in the cycle.
pub const fn cycle_next(graha: Graha, step: usize) -> Graha {
    VIMSHOTTARI_GRAHAS[(cycle_position(graha) + step) % VIMSHOTTARI_GRAHAS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_cycle() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn cycle_position_matches_table() {
        for (i, g) in VIMSHOTTARI_GRAHAS.iter().enumerate() {
            assert_eq!(cycle_position(*g), i);
        }
    }

    #[test]
    fn cycle_next_wraps() {
        assert_eq!(cycle_next(Graha::Buddh, 1), Graha::Ketu);
        assert_eq!(cycle_next(Graha::Shukra, 0), Graha::Shukra);
        assert_eq!(cycle_next(Graha::Rahu, 9), Graha::Rahu);
    }

    #[test]
    fn known_years() {
        assert!((vimshottari_years(Graha::Shukra) - 20.0).abs() < 1e-15);
        assert!((vimshottari_years(Graha::Surya) - 6.0).abs() < 1e-15);
    }
}
