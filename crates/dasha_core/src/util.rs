//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!(normalize_360(0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_full_turn_wraps() {
        assert!(normalize_360(360.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_past_full_turn() {
        assert!((normalize_360(373.0) - 13.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-1.0) - 359.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_full_turn() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }
}
