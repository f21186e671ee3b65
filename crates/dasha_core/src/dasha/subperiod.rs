//! Proportional sub-period generation.
//!
//! child duration = parent duration * (child full period / 120)
//!
//! Children walk the Vimshottari cycle starting at the parent's own lord, so
//! the first antardasha of a mahadasha is always ruled by the same graha.

use crate::config::DashaConfig;
use crate::date::add_years;

use super::types::DashaPeriod;
use super::vimshottari_data::{VIMSHOTTARI_TOTAL_YEARS, cycle_next, vimshottari_years};

/// Snap the last child's end to the parent's end to absorb rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent: &DashaPeriod) {
    if let Some(last) = children.last_mut() {
        last.end = parent.end;
    }
}

/// Generate the 9 proportional children of a parent period.
///
/// Returns an empty vector for the deepest level.
pub fn proportional_children(parent: &DashaPeriod, config: &DashaConfig) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };

    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start;

    for order_0 in 0..9 {
        let lord = cycle_next(parent.lord, order_0);
        let duration_years =
            parent.duration_years * (vimshottari_years(lord) / VIMSHOTTARI_TOTAL_YEARS);
        let end = add_years(cursor, duration_years, config);
        children.push(DashaPeriod {
            lord,
            level: child_level,
            order: (order_0 as u16) + 1,
            duration_years,
            start: cursor,
            end,
        });
        cursor = end;
    }

    if config.snap_to_parent {
        snap_last_child_end(&mut children, parent);
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DashaLevel;
    use crate::graha::Graha;
    use chrono::{TimeZone, Utc};

    fn parent(lord: Graha, years: f64, level: DashaLevel) -> DashaPeriod {
        let cfg = DashaConfig::default();
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        DashaPeriod {
            lord,
            level,
            order: 1,
            duration_years: years,
            start,
            end: add_years(start, years, &cfg),
        }
    }

    #[test]
    fn children_start_at_parent_lord() {
        let p = parent(Graha::Shukra, 20.0, DashaLevel::Mahadasha);
        let children = proportional_children(&p, &DashaConfig::default());
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].lord, Graha::Shukra);
        assert_eq!(children[1].lord, Graha::Surya);
        assert_eq!(children[8].lord, Graha::Ketu);
        assert!(children.iter().all(|c| c.level == DashaLevel::Antardasha));
    }

    #[test]
    fn children_sum_to_parent() {
        let p = parent(Graha::Rahu, 18.0, DashaLevel::Mahadasha);
        let children = proportional_children(&p, &DashaConfig::default());
        let total: f64 = children.iter().map(|c| c.duration_years).sum();
        assert!((total - p.duration_years).abs() < 1e-9);
        assert_eq!(children[0].start, p.start);
        assert_eq!(children[8].end, p.end);
        for pair in children.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn first_antardasha_length() {
        // Shukra-Shukra antardasha: 20 * 20 / 120 = 3.333... years
        let p = parent(Graha::Shukra, 20.0, DashaLevel::Mahadasha);
        let children = proportional_children(&p, &DashaConfig::default());
        assert!((children[0].duration_years - 20.0 * 20.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn without_snapping_end_stays_close() {
        let cfg = DashaConfig {
            snap_to_parent: false,
            ..DashaConfig::default()
        };
        let p = parent(Graha::Guru, 16.0, DashaLevel::Antardasha);
        let children = proportional_children(&p, &cfg);
        let drift = (children[8].end - p.end).num_milliseconds().abs();
        assert!(drift <= 9, "drift {drift} ms");
    }

    #[test]
    fn deepest_level_has_no_children() {
        let p = parent(Graha::Ketu, 0.1, DashaLevel::Pratyantardasha);
        assert!(proportional_children(&p, &DashaConfig::default()).is_empty());
    }
}
