use crate::config::ScoringWeights;
use crate::utils::{
    elapsed_millis, round_half_up, DAY_WINDOW_MS, MONTH_WINDOW_MS, WEEK_WINDOW_MS,
};

/// Post counts inside each trending window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub last_day: i64,
    pub last_week: i64,
    pub last_month: i64,
}

impl WindowCounts {
    /// Count timestamps younger than each window; one timestamp can fall in all three
    pub fn from_timestamps(timestamps: &[i64], now_ms: i64) -> Self {
        let mut counts = WindowCounts::default();
        for &ts in timestamps {
            let age = elapsed_millis(ts, now_ms);
            if age < DAY_WINDOW_MS {
                counts.last_day += 1;
            }
            if age < WEEK_WINDOW_MS {
                counts.last_week += 1;
            }
            if age < MONTH_WINDOW_MS {
                counts.last_month += 1;
            }
        }
        counts
    }
}

/// Topic trending score
///
/// `round(24h*100 + 7d*10 + 30d*1 + engagement*0.1)` with the default weights.
pub fn trending_score(
    timestamps: &[i64],
    engagement: i64,
    now_ms: i64,
    weights: &ScoringWeights,
) -> i64 {
    let counts = WindowCounts::from_timestamps(timestamps, now_ms);

    round_half_up(
        counts.last_day as f64 * weights.trending_day
            + counts.last_week as f64 * weights.trending_week
            + counts.last_month as f64 * weights.trending_month
            + engagement as f64 * weights.engagement,
    )
}
