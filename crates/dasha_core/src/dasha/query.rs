//! Active-period lookup.

use chrono::{DateTime, Utc};

use super::types::{DashaNode, DashaPeriod};

/// Index of the period containing `at` in a contiguous, chronologically
/// ordered slice. Intervals are half-open `[start, end)`.
pub fn find_active_period(periods: &[DashaPeriod], at: DateTime<Utc>) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end <= at);
    periods.get(idx).filter(|p| p.contains(at)).map(|_| idx)
}

/// Chain of periods active at `at`, from mahadasha down to the deepest
/// generated level. Empty when `at` lies outside the timeline.
pub fn active_periods(tree: &[DashaNode], at: DateTime<Utc>) -> Vec<DashaPeriod> {
    let mut chain = Vec::with_capacity(3);
    let mut level = tree;
    loop {
        let idx = level.partition_point(|n| n.period.end <= at);
        match level.get(idx) {
            Some(node) if node.period.contains(at) => {
                chain.push(node.period);
                level = &node.children;
            }
            _ => break,
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashaConfig;
    use crate::dasha::types::DashaLevel;
    use crate::dasha::vimshottari::{vimshottari_hierarchy, vimshottari_level0};
    use crate::graha::Graha;
    use chrono::{Duration, TimeZone};

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn finds_first_and_boundary() {
        let periods = vimshottari_level0(birth(), 0.0, &DashaConfig::default());
        assert_eq!(find_active_period(&periods, birth()), Some(0));
        // Boundary instant belongs to the later period
        assert_eq!(find_active_period(&periods, periods[0].end), Some(1));
    }

    #[test]
    fn outside_range() {
        let periods = vimshottari_level0(birth(), 0.0, &DashaConfig::default());
        assert_eq!(find_active_period(&periods, birth() - Duration::days(1)), None);
        assert_eq!(find_active_period(&periods, periods[8].end), None);
        assert_eq!(find_active_period(&[], birth()), None);
    }

    #[test]
    fn chain_at_birth() {
        let tree = vimshottari_hierarchy(
            birth(),
            0.0,
            DashaLevel::Pratyantardasha,
            &DashaConfig::default(),
        );
        let chain = active_periods(&tree, birth());
        let lords: Vec<Graha> = chain.iter().map(|p| p.lord).collect();
        assert_eq!(lords, vec![Graha::Ketu, Graha::Ketu, Graha::Ketu]);
    }

    #[test]
    fn chain_matches_brute_force() {
        let tree = vimshottari_hierarchy(
            birth(),
            123.4,
            DashaLevel::Pratyantardasha,
            &DashaConfig::default(),
        );
        let at = birth() + Duration::days(10_000);
        let chain = active_periods(&tree, at);
        assert_eq!(chain.len(), 3);

        let maha = tree.iter().find(|m| m.period.contains(at)).unwrap();
        let antar = maha.children.iter().find(|a| a.period.contains(at)).unwrap();
        let prat = antar.children.iter().find(|p| p.period.contains(at)).unwrap();
        assert_eq!(chain[0], maha.period);
        assert_eq!(chain[1], antar.period);
        assert_eq!(chain[2], prat.period);
    }

    #[test]
    fn chain_before_birth_is_empty() {
        let tree = vimshottari_hierarchy(
            birth(),
            0.0,
            DashaLevel::Pratyantardasha,
            &DashaConfig::default(),
        );
        assert!(active_periods(&tree, birth() - Duration::seconds(1)).is_empty());
    }
}
