/// Ranking Module
///
/// Sorts scored forums, users and topics by a caller-chosen criterion.
///
/// # Contract
/// - The criterion string comes straight from the query string; anything
///   missing or unknown falls back to the kind's primary score.
/// - Sorting is descending and stable, so equal values keep input order.
/// - Truncation to the limit happens after the whole input is sorted.
pub mod criteria;
pub mod ranker;

pub use criteria::{EntityKind, ForumSort, SortCriterion, TopicSort, UserSort};
pub use ranker::DiscoveryRanker;

use crate::models::RankedPage;
use tracing::debug;

/// Entity that can be ordered by one of its kind's criteria
pub trait Rankable {
    type Criterion: SortCriterion;

    /// Numeric value sorted on (descending) for `criterion`
    fn sort_value(&self, criterion: Self::Criterion) -> i64;
}

/// Sort `entities` by the resolved criterion and keep the first `limit`
pub fn rank<T: Rankable>(
    mut entities: Vec<T>,
    criterion: Option<&str>,
    limit: usize,
) -> RankedPage<T> {
    let kind = <T::Criterion as SortCriterion>::KIND;
    let sort = <T::Criterion as SortCriterion>::resolve(criterion);
    let candidates = entities.len();

    // sort_by is stable: ties keep their input order
    entities.sort_by(|a, b| b.sort_value(sort).cmp(&a.sort_value(sort)));
    entities.truncate(limit);

    debug!(
        kind = %kind,
        requested = criterion.unwrap_or(""),
        sorted_by = sort.as_str(),
        candidates,
        returned = entities.len(),
        "Ranked discovery entities"
    );

    RankedPage {
        total: entities.len(),
        sorted_by: sort.as_str(),
        items: entities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForumStats, TopicStats, UserStats};

    fn forum(id: usize, members: i64) -> ForumStats {
        ForumStats {
            forum_id: format!("f{id}"),
            name: String::new(),
            subdomain: String::new(),
            description: None,
            is_public: true,
            member_count: members,
            post_count: 0,
            activity_score: 0,
            created_at: None,
        }
    }

    fn topic(name: &str, post_count: i64, engagement: i64, trending: i64) -> TopicStats {
        TopicStats {
            name: name.to_string(),
            post_count,
            engagement,
            forum_count: 1,
            trending,
        }
    }

    #[test]
    fn test_rank_empty_input() {
        let page = rank(Vec::<ForumStats>::new(), Some("members"), 100);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.sorted_by, "members");
    }

    #[test]
    fn test_rank_sorts_whole_input_before_truncating() {
        // Highest member counts sit at the end of the input
        let forums: Vec<ForumStats> = (0..150).map(|i| forum(i, i as i64)).collect();
        let page = rank(forums, Some("members"), 100);

        assert_eq!(page.total, 100);
        assert_eq!(page.items[0].member_count, 149);
        assert_eq!(page.items[99].member_count, 50);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let forums = vec![forum(0, 5), forum(1, 10), forum(2, 5), forum(3, 3)];
        let page = rank(forums, Some("members"), 10);
        let ids: Vec<_> = page.items.iter().map(|f| f.forum_id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f0", "f2", "f3"]);
    }

    #[test]
    fn test_unknown_criterion_falls_back() {
        let topics = vec![topic("a", 9, 0, 1), topic("b", 1, 0, 50)];
        let page = rank(topics, Some("random"), 10);
        assert_eq!(page.sorted_by, "trending");
        assert_eq!(page.items[0].name, "b");
    }

    #[test]
    fn test_topic_engagement_criterion() {
        let topics = vec![topic("a", 9, -3, 1), topic("b", 1, 12, 50), topic("c", 4, 0, 7)];
        let page = rank(topics, Some("engagement"), 2);
        let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let users = vec![UserStats {
            user_id: "u1".to_string(),
            email: None,
            username: None,
            profile_picture: None,
            forum_count: 0,
            post_count: 0,
            karma: 1,
            created_at: None,
        }];
        let page = rank(users, None, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.sorted_by, "karma");
    }
}
