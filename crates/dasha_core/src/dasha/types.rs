//! Core types for Vimshottari dasha calculations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graha::Graha;

/// Year length for dasha date arithmetic: the mean Gregorian year.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// The 3 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Length in dasha years.
    pub duration_years: f64,
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl DashaPeriod {
    /// Whether `at` falls in `[start, end)`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// A period together with the sub-periods it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaNode {
    pub period: DashaPeriod,
    /// Ordered children; empty at the deepest generated level.
    pub children: Vec<DashaNode>,
}

impl DashaNode {
    /// Leaf node with no children.
    pub fn leaf(period: DashaPeriod) -> Self {
        Self {
            period,
            children: Vec::new(),
        }
    }

    /// Number of leaves under this node (1 for a leaf).
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(DashaNode::leaf_count).sum()
        }
    }
}
