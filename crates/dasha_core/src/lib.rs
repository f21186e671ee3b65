//! Vimshottari dasha timeline computation.
//!
//! This crate provides:
//! - Moon longitude resolution from a rashi number and degrees within it
//! - Nakshatra location (27-scheme) with the elapsed fraction
//! - The Vimshottari mahadasha sequence with birth balance
//! - Proportional sub-period generation down to pratyantardasha
//! - A flattened row view of the full three-level timeline
//!
//! Longitudes are taken as already sidereal; no ayanamsha is applied.

pub mod calculate;
pub mod config;
pub mod dasha;
pub mod date;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use calculate::{
    DashaMeta, DashaRow, DashaTimeline, calculate_vimshottari_dasha,
    calculate_vimshottari_dasha_with, flatten_rows,
};
pub use config::DashaConfig;
pub use dasha::{
    BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaNode, DashaPeriod, VIMSHOTTARI_GRAHAS,
    VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, active_periods, find_active_period,
    nakshatra_birth_balance, proportional_children, vimshottari_hierarchy, vimshottari_level0,
    vimshottari_years,
};
pub use date::{add_years, format_date, parse_birth_date, years_between};
pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraPosition, nakshatra_position,
};
pub use rashi::{ALL_RASHIS, Rashi, moon_longitude_from_rashi};
pub use util::normalize_360;
