//! Birth date parsing, dasha-year date arithmetic and row date formatting.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::DashaConfig;
use crate::error::DashaError;

/// Naive date-time layouts accepted after RFC 3339; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a birth date.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339 with an offset, or a naive
/// `YYYY-MM-DDTHH:MM[:SS]` taken as UTC. Blank input counts as missing.
pub fn parse_birth_date(input: Option<&str>) -> Result<DateTime<Utc>, DashaError> {
    let s = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(DashaError::MissingBirthDate),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| DashaError::InvalidBirthDate(s.to_string()))
}

/// Format an instant as `DD-MM-YYYY`, or `N/A` when absent.
pub fn format_date(instant: Option<DateTime<Utc>>) -> String {
    match instant {
        Some(dt) => dt.format("%d-%m-%Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Advance `start` by a number of dasha years, at millisecond resolution.
///
/// Saturates at the latest representable instant instead of overflowing.
pub fn add_years(start: DateTime<Utc>, years: f64, config: &DashaConfig) -> DateTime<Utc> {
    let millis = (years * config.millis_per_year()).round() as i64;
    Duration::try_milliseconds(millis)
        .and_then(|d| start.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Years between two instants, measured in dasha years.
pub fn years_between(start: DateTime<Utc>, end: DateTime<Utc>, config: &DashaConfig) -> f64 {
    (end - start).num_milliseconds() as f64 / config.millis_per_year()
}
