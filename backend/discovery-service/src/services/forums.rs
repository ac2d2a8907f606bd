use crate::config::ScoringWeights;
use crate::models::{ForumRecord, ForumStats};
use crate::utils::{age_in_days, round_half_up};

/// Forum activity score
///
/// `round(posts_per_day * 100 + member_count * 10)` with the default weights.
/// Forums with no measurable age (created at `now_ms`, in the future, or
/// missing a timestamp) use their raw post count as posts per day. A zero
/// `createdAt` is an unset timestamp, not the epoch.
pub fn activity_score(forum: &ForumRecord, now_ms: i64, weights: &ScoringWeights) -> i64 {
    let post_count = forum.post_count.unwrap_or(0) as f64;
    let member_count = forum.member_count.unwrap_or(0) as f64;
    let created_at = forum.created_at.filter(|&ts| ts != 0).unwrap_or(now_ms);
    let age = age_in_days(created_at, now_ms);

    let posts_per_day = if age > 0.0 { post_count / age } else { post_count };

    round_half_up(posts_per_day * weights.forum_post + member_count * weights.forum_member)
}

/// Project forum records into scored listings, preserving input order
pub fn forum_stats(
    forums: &[ForumRecord],
    now_ms: i64,
    weights: &ScoringWeights,
) -> Vec<ForumStats> {
    forums
        .iter()
        .map(|forum| ForumStats {
            forum_id: forum.forum_id.clone(),
            name: forum.name.clone(),
            subdomain: forum.subdomain.clone(),
            description: forum.description.clone(),
            is_public: forum.is_public,
            member_count: forum.member_count.unwrap_or(0),
            post_count: forum.post_count.unwrap_or(0),
            activity_score: activity_score(forum, now_ms, weights),
            created_at: forum.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MILLIS_PER_DAY;

    const NOW: i64 = 1_700_000_000_000;

    fn forum(members: Option<i64>, posts: Option<i64>, created_at: Option<i64>) -> ForumRecord {
        ForumRecord {
            forum_id: "f".to_string(),
            member_count: members,
            post_count: posts,
            created_at,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_age_uses_post_count() {
        let weights = ScoringWeights::default();
        let score = activity_score(&forum(Some(3), Some(10), Some(NOW)), NOW, &weights);
        assert_eq!(score, 10 * 100 + 3 * 10);
    }

    #[test]
    fn test_missing_created_at_is_zero_age() {
        let weights = ScoringWeights::default();
        let score = activity_score(&forum(None, Some(2), None), NOW, &weights);
        assert_eq!(score, 200);
    }

    #[test]
    fn test_future_created_at_uses_post_count() {
        let weights = ScoringWeights::default();
        let score = activity_score(&forum(None, Some(5), Some(NOW + 1000)), NOW, &weights);
        assert_eq!(score, 500);
    }

    #[test]
    fn test_posts_per_day_over_age() {
        let weights = ScoringWeights::default();
        // 20 posts over 4 days -> 5/day -> 500, plus 7 members -> 70
        let score = activity_score(
            &forum(Some(7), Some(20), Some(NOW - 4 * MILLIS_PER_DAY)),
            NOW,
            &weights,
        );
        assert_eq!(score, 570);
    }

    #[test]
    fn test_fractional_rate_rounds() {
        let weights = ScoringWeights::default();
        // 1 post over 3 days -> 33.33.. -> 33
        let record = forum(None, Some(1), Some(NOW - 3 * MILLIS_PER_DAY));
        let score = activity_score(&record, NOW, &weights);
        assert_eq!(score, 33);
    }

    #[test]
    fn test_missing_counters_score_zero() {
        let weights = ScoringWeights::default();
        let record = forum(None, None, Some(NOW - MILLIS_PER_DAY));
        let score = activity_score(&record, NOW, &weights);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_forum_stats_projection() {
        let weights = ScoringWeights::default();
        let records = vec![ForumRecord {
            forum_id: "f1".to_string(),
            name: "Rust".to_string(),
            subdomain: "rust".to_string(),
            owner_id: Some("owner".to_string()),
            is_public: true,
            member_count: Some(4),
            created_at: Some(NOW),
            ..Default::default()
        }];

        let stats = forum_stats(&records, NOW, &weights);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].member_count, 4);
        assert_eq!(stats[0].post_count, 0);
        assert_eq!(stats[0].activity_score, 40);
        assert_eq!(stats[0].subdomain, "rust");
    }

    #[test]
    fn test_zero_created_at_is_unset() {
        let weights = ScoringWeights::default();
        let score = activity_score(&forum(Some(1), Some(4), Some(0)), NOW, &weights);
        assert_eq!(score, 4 * 100 + 10);
    }

    #[test]
    fn test_extreme_created_at_does_not_overflow() {
        let weights = ScoringWeights::default();
        // Ancient forum: posts per day rounds to nothing
        let ancient = activity_score(&forum(Some(2), Some(9), Some(i64::MIN)), NOW, &weights);
        assert_eq!(ancient, 20);
        let future = activity_score(&forum(Some(2), Some(9), Some(i64::MAX)), NOW, &weights);
        assert_eq!(future, 920);
    }
}
