//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle is generated in three hierarchical levels
//! (Mahadasha, Antardasha, Pratyantardasha). Level 0 starts from the Moon's
//! nakshatra with a birth balance; every deeper level splits its parent
//! proportionally, starting from the parent's own lord.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use query::{active_periods, find_active_period};
pub use subperiod::proportional_children;
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaNode, DashaPeriod};
pub use vimshottari::{vimshottari_hierarchy, vimshottari_level0};
pub use vimshottari_data::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, cycle_next, cycle_position,
    vimshottari_years,
};
