pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod snapshot;
pub mod utils;

pub use config::{Config, DiscoveryConfig, ScoringWeights};
pub use error::{DiscoveryError, Result};
pub use models::{ForumStats, RankedPage, TopicStats, UserStats};
pub use services::{DiscoveryRanker, EntityKind};
pub use snapshot::DiscoverySnapshot;
