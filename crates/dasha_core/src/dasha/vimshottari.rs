//! Vimshottari dasha engine.
//!
//! - Level 0: the mahadasha sequence from birth, first entry shortened to
//!   the birth balance
//! - Levels 1..: proportional children, built recursively into a tree

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::DashaConfig;
use crate::date::add_years;

use super::balance::nakshatra_birth_balance;
use super::subperiod::proportional_children;
use super::types::{DashaLevel, DashaNode, DashaPeriod};
use super::vimshottari_data::{VIMSHOTTARI_GRAHAS, cycle_next, vimshottari_years};

/// Generate the 9 mahadasha periods from birth.
///
/// The first period is the remainder of the birth nakshatra lord's period;
/// the other 8 are full periods following the cycle order. Together they
/// cover one full cycle plus the elapsed part of the first lord.
pub fn vimshottari_level0(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    config: &DashaConfig,
) -> Vec<DashaPeriod> {
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let n = VIMSHOTTARI_GRAHAS.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth;

    for offset in 0..n {
        let lord = cycle_next(balance.lord, offset);
        let duration_years = if offset == 0 {
            balance.balance_years
        } else {
            vimshottari_years(lord)
        };
        let end = add_years(cursor, duration_years, config);
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            order: (offset as u16) + 1,
            duration_years,
            start: cursor,
            end,
        });
        cursor = end;
    }

    periods
}

/// Build the subtree under `period` down to `max_level`.
fn build_node(period: DashaPeriod, max_level: DashaLevel, config: &DashaConfig) -> DashaNode {
    if period.level >= max_level {
        return DashaNode::leaf(period);
    }
    let children = proportional_children(&period, config)
        .into_iter()
        .map(|child| build_node(child, max_level, config))
        .collect();
    DashaNode { period, children }
}

/// Generate the mahadasha sequence and subdivide each period down to
/// `max_level`.
pub fn vimshottari_hierarchy(
    birth: DateTime<Utc>,
    moon_sidereal_lon: f64,
    max_level: DashaLevel,
    config: &DashaConfig,
) -> Vec<DashaNode> {
    let tree: Vec<DashaNode> = vimshottari_level0(birth, moon_sidereal_lon, config)
        .into_iter()
        .map(|maha| build_node(maha, max_level, config))
        .collect();
    debug!(
        mahadashas = tree.len(),
        leaves = tree.iter().map(DashaNode::leaf_count).sum::<usize>(),
        "built vimshottari hierarchy"
    );
    tree
}
