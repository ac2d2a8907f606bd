pub mod forums;
pub mod ranking;
pub mod topics;
pub mod users;

pub use forums::{activity_score, forum_stats};
pub use ranking::{rank, DiscoveryRanker, EntityKind, Rankable, SortCriterion};
pub use topics::{extract_hashtags, topic_stats, trending_score};
pub use users::{karma, user_stats};
