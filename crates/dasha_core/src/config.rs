//! Calculation settings.

use serde::{Deserialize, Serialize};

use crate::dasha::types::DAYS_PER_YEAR;
use crate::error::DashaError;

/// Settings that shape the date arithmetic of a dasha timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Length of one dasha year in days.
    pub days_per_year: f64,
    /// Snap each level's last child end to its parent's end so rounding
    /// never leaves a gap between siblings of adjacent parents.
    pub snap_to_parent: bool,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            days_per_year: DAYS_PER_YEAR,
            snap_to_parent: true,
        }
    }
}

impl DashaConfig {
    /// Parse and validate a config from JSON. Missing fields take their
    /// defaults.
    pub fn from_json_str(s: &str) -> Result<Self, DashaError> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| DashaError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that periods will run forward in time.
    pub fn validate(&self) -> Result<(), DashaError> {
        if self.days_per_year.is_finite() && self.days_per_year > 0.0 {
            Ok(())
        } else {
            Err(DashaError::InvalidConfig(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )))
        }
    }

    /// Milliseconds in one dasha year.
    pub fn millis_per_year(&self) -> f64 {
        self.days_per_year * 86_400_000.0
    }
}
