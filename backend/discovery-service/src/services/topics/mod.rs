/// Topic discovery
///
/// Topics are hashtags found in post titles and bodies. Every occurrence of a
/// tag counts: a post that repeats `#rust` twice adds two to the topic's post
/// count and its engagement twice.
pub mod hashtag_parser;
pub mod trending;

pub use hashtag_parser::extract_hashtags;
pub use trending::{trending_score, WindowCounts};

use crate::config::ScoringWeights;
use crate::models::{PostRecord, TopicStats};
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
struct TopicAccumulator {
    name: String,
    post_count: i64,
    engagement: i64,
    // Posts without a forum still form one bucket of their own
    forums: HashSet<Option<String>>,
    timestamps: Vec<i64>,
}

impl TopicAccumulator {
    fn new(name: String) -> Self {
        Self {
            name,
            post_count: 0,
            engagement: 0,
            forums: HashSet::new(),
            timestamps: Vec::new(),
        }
    }

    fn record(&mut self, post: &PostRecord) {
        self.post_count += 1;
        self.engagement = self.engagement.saturating_add(post.engagement());
        self.forums.insert(post.forum_id.clone());
        if let Some(created_at) = post.created_at {
            self.timestamps.push(created_at);
        }
    }

    fn finish(self, now_ms: i64, weights: &ScoringWeights) -> TopicStats {
        TopicStats {
            trending: trending_score(&self.timestamps, self.engagement, now_ms, weights),
            name: self.name,
            post_count: self.post_count,
            engagement: self.engagement,
            forum_count: self.forums.len() as i64,
        }
    }
}

/// Extract topics from posts and score them
///
/// Topics come back in order of first appearance, which is the tie order for
/// ranking.
pub fn topic_stats(
    posts: &[PostRecord],
    now_ms: i64,
    weights: &ScoringWeights,
) -> Vec<TopicStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut topics: Vec<TopicAccumulator> = Vec::new();

    for post in posts {
        for tag in extract_hashtags(&post.searchable_text()) {
            let slot = match index.get(&tag) {
                Some(&slot) => slot,
                None => {
                    topics.push(TopicAccumulator::new(tag.clone()));
                    index.insert(tag, topics.len() - 1);
                    topics.len() - 1
                }
            };
            topics[slot].record(post);
        }
    }

    topics
        .into_iter()
        .map(|topic| topic.finish(now_ms, weights))
        .collect()
}
