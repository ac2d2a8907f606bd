use super::rank;
use crate::config::{DiscoveryConfig, ScoringWeights};
use crate::models::{
    ForumRecord, ForumStats, PostRecord, RankedPage, TopicStats, UserRecord, UserStats,
};
use crate::services::{forums, topics, users};
use crate::utils::epoch_millis;
use chrono::{DateTime, Utc};

/// Discovery Ranker - top forums, users and topics
///
/// Holds only configuration; every call works on the records passed in and
/// the evaluation instant, so one ranker can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct DiscoveryRanker {
    default_limit: usize,
    weights: ScoringWeights,
}

impl Default for DiscoveryRanker {
    fn default() -> Self {
        Self::new(&DiscoveryConfig::default())
    }
}

impl DiscoveryRanker {
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            default_limit: config.default_limit,
            weights: config.weights(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank forums (`activity|members|posts|newest`)
    pub fn top_forums(
        &self,
        forums: &[ForumRecord],
        now: DateTime<Utc>,
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> RankedPage<ForumStats> {
        let stats = forums::forum_stats(forums, epoch_millis(now), &self.weights);
        rank(stats, sort, self.limit(limit))
    }

    pub fn top_forums_now(
        &self,
        forums: &[ForumRecord],
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> RankedPage<ForumStats> {
        self.top_forums(forums, Utc::now(), sort, limit)
    }

    /// Rank users (`karma|forums|activity|newest`)
    ///
    /// `forums` and `posts` are the full collections; each user's counts and
    /// karma are aggregated from them.
    pub fn top_users(
        &self,
        users: &[UserRecord],
        forums: &[ForumRecord],
        posts: &[PostRecord],
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> RankedPage<UserStats> {
        let stats = users::user_stats(users, forums, posts);
        rank(stats, sort, self.limit(limit))
    }

    /// Rank hashtag topics (`trending|posts|engagement`)
    pub fn top_topics(
        &self,
        posts: &[PostRecord],
        now: DateTime<Utc>,
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> RankedPage<TopicStats> {
        let stats = topics::topic_stats(posts, epoch_millis(now), &self.weights);
        rank(stats, sort, self.limit(limit))
    }

    pub fn top_topics_now(
        &self,
        posts: &[PostRecord],
        sort: Option<&str>,
        limit: Option<usize>,
    ) -> RankedPage<TopicStats> {
        self.top_topics(posts, Utc::now(), sort, limit)
    }

    fn limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit)
    }
}
