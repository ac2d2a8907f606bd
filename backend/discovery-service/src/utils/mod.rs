// Utility functions for discovery-service

use chrono::{DateTime, Utc};

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Trending windows, all measured back from the evaluation instant
pub const DAY_WINDOW_MS: i64 = MILLIS_PER_DAY;
pub const WEEK_WINDOW_MS: i64 = 7 * MILLIS_PER_DAY;
pub const MONTH_WINDOW_MS: i64 = 30 * MILLIS_PER_DAY;

/// Round to the nearest integer, halves towards positive infinity
///
/// `-2.5` rounds to `-2`, unlike `f64::round` which gives `-3`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Epoch milliseconds for an evaluation instant
pub fn epoch_millis(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}

/// Elapsed milliseconds, saturating at the `i64` bounds
pub fn elapsed_millis(since: i64, now_ms: i64) -> i64 {
    now_ms.saturating_sub(since)
}

/// Age in fractional days; negative for timestamps after `now_ms`
pub fn age_in_days(created_at: i64, now_ms: i64) -> f64 {
    elapsed_millis(created_at, now_ms) as f64 / MILLIS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_age_in_days() {
        assert!((age_in_days(0, MILLIS_PER_DAY * 3) - 3.0).abs() < 1e-9);
        assert!((age_in_days(MILLIS_PER_DAY / 2, MILLIS_PER_DAY) - 0.5).abs() < 1e-9);
        assert!(age_in_days(10, 0) < 0.0);
    }

    #[test]
    fn test_epoch_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(epoch_millis(now), 1_700_000_000_123);
    }

    #[test]
    fn test_elapsed_saturates_at_extremes() {
        assert_eq!(elapsed_millis(i64::MIN, 1_700_000_000_000), i64::MAX);
        assert_eq!(elapsed_millis(i64::MAX, -1), i64::MIN);
        assert!(age_in_days(i64::MIN, 0) > 0.0);
    }
}
