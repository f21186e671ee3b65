//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! Computed from the Moon's position within its nakshatra. The nakshatra's
//! lord rules the first mahadasha, and the untraversed fraction of the
//! nakshatra is the fraction of that lord's period still to run.

use tracing::debug;

use crate::graha::Graha;
use crate::nakshatra::{NakshatraPosition, nakshatra_position};

use super::vimshottari_data::{VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS};

/// Birth balance for the Vimshottari system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// The Moon's nakshatra position.
    pub position: NakshatraPosition,
    /// Lord of the first (partially elapsed) mahadasha.
    pub lord: Graha,
    /// Remaining years of the first mahadasha.
    pub balance_years: f64,
}

impl BirthBalance {
    /// Fraction of the first mahadasha already elapsed at birth, [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.position.fraction
    }
}

/// Compute the Vimshottari birth balance from the Moon's sidereal longitude.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let position = nakshatra_position(moon_sidereal_lon);
    let seq_idx = position.index as usize % VIMSHOTTARI_GRAHAS.len();
    let lord = VIMSHOTTARI_GRAHAS[seq_idx];
    let balance_years = VIMSHOTTARI_YEARS[seq_idx] * (1.0 - position.fraction);
    debug!(lord = lord.name(), balance_years, "birth balance");

    BirthBalance {
        position,
        lord,
        balance_years,
    }
}
