//! Full Vimshottari timeline from birth inputs.
//!
//! Resolves the Moon longitude, builds the three-level hierarchy and
//! flattens it into one row per pratyantardasha, in chronological order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::DashaConfig;
use crate::dasha::balance::nakshatra_birth_balance;
use crate::dasha::query::active_periods;
use crate::dasha::types::{DashaLevel, DashaNode, DashaPeriod};
use crate::dasha::vimshottari::vimshottari_hierarchy;
use crate::date::parse_birth_date;
use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_position;
use crate::rashi::moon_longitude_from_rashi;

/// One pratyantardasha with its enclosing lords.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaRow {
    pub maha: Graha,
    pub antar: Graha,
    pub pratyantar: Graha,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Inputs resolved along the way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaMeta {
    /// Absolute sidereal Moon longitude in degrees.
    pub moon_longitude: f64,
    /// 0-based nakshatra index of the Moon.
    pub nakshatra_index: u8,
    /// Name of the Moon's nakshatra.
    pub nakshatra: &'static str,
    /// Lord of the first mahadasha.
    pub starting_lord: Graha,
    /// Years of the first mahadasha remaining at birth.
    pub balance_years: f64,
    /// Fraction of the birth nakshatra already traversed.
    pub elapsed_fraction: f64,
}

/// A computed timeline: flat rows plus the tree they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub rows: Vec<DashaRow>,
    pub meta: DashaMeta,
    #[serde(skip)]
    pub mahadashas: Vec<DashaNode>,
}

impl DashaTimeline {
    /// Periods active at `at`, mahadasha first.
    pub fn active_at(&self, at: DateTime<Utc>) -> Vec<DashaPeriod> {
        active_periods(&self.mahadashas, at)
    }

    /// All periods of one level in chronological order.
    pub fn periods_at_level(&self, level: DashaLevel) -> Vec<DashaPeriod> {
        let mut out = Vec::new();
        collect_level(&self.mahadashas, level, &mut out);
        out
    }
}

fn collect_level(nodes: &[DashaNode], level: DashaLevel, out: &mut Vec<DashaPeriod>) {
    for node in nodes {
        if node.period.level == level {
            out.push(node.period);
        } else if node.period.level < level {
            collect_level(&node.children, level, out);
        }
    }
}

/// Flatten a three-level tree into pratyantardasha rows.
pub fn flatten_rows(mahadashas: &[DashaNode]) -> Vec<DashaRow> {
    let mut rows = Vec::with_capacity(mahadashas.len() * 81);
    for maha in mahadashas {
        for antar in &maha.children {
            for prat in &antar.children {
                rows.push(DashaRow {
                    maha: maha.period.lord,
                    antar: antar.period.lord,
                    pratyantar: prat.period.lord,
                    from: prat.period.start,
                    to: prat.period.end,
                });
            }
        }
    }
    rows
}

/// Compute the Vimshottari timeline with default settings.
///
/// Fails only on a missing or unparseable birth date. Sign and degrees are
/// coerced to 1 and 0 when absent or invalid.
pub fn calculate_vimshottari_dasha(
    birth_date: Option<&str>,
    moon_sign: Option<f64>,
    moon_degrees: Option<f64>,
) -> Result<DashaTimeline, DashaError> {
    calculate_vimshottari_dasha_with(
        birth_date,
        moon_sign,
        moon_degrees,
        &DashaConfig::default(),
    )
}

/// Compute the Vimshottari timeline with explicit settings.
///
/// Also fails with [`DashaError::InvalidConfig`] when `days_per_year` is not
/// a positive finite number.
pub fn calculate_vimshottari_dasha_with(
    birth_date: Option<&str>,
    moon_sign: Option<f64>,
    moon_degrees: Option<f64>,
    config: &DashaConfig,
) -> Result<DashaTimeline, DashaError> {
    config.validate()?;
    let birth = parse_birth_date(birth_date)?;
    let moon_longitude = moon_longitude_from_rashi(moon_sign, moon_degrees);

    let mahadashas =
        vimshottari_hierarchy(birth, moon_longitude, DashaLevel::Pratyantardasha, config);
    let rows = flatten_rows(&mahadashas);

    let balance = nakshatra_birth_balance(moon_longitude);
    let position = nakshatra_position(moon_longitude);
    let meta = DashaMeta {
        moon_longitude,
        nakshatra_index: position.index,
        nakshatra: position.nakshatra.name(),
        starting_lord: balance.lord,
        balance_years: balance.balance_years,
        elapsed_fraction: balance.elapsed_fraction(),
    };
    debug!(%birth, rows = rows.len(), "computed vimshottari timeline");

    Ok(DashaTimeline {
        rows,
        meta,
        mahadashas,
    })
}
