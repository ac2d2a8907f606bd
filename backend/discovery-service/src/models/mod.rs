use serde::{Deserialize, Serialize};

// ============================================================================
// STORE RECORDS (input)
// ============================================================================

/// Forum document as exported by the store
///
/// Counters are optional because older documents were written without them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumRecord {
    pub forum_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subdomain: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub member_count: Option<i64>,
    #[serde(default)]
    pub post_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// User document as exported by the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Post document as exported by the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub post_id: String,
    #[serde(default)]
    pub forum_id: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub vote_score: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl PostRecord {
    /// Votes plus comments, missing counters read as zero
    pub fn engagement(&self) -> i64 {
        self.vote_score
            .unwrap_or(0)
            .saturating_add(self.comment_count.unwrap_or(0))
    }

    /// Text scanned for hashtags
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.content.as_deref().unwrap_or("")
        )
    }
}

// ============================================================================
// RANKED VIEWS (output)
// ============================================================================

/// Public forum listing with its activity score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumStats {
    pub forum_id: String,
    pub name: String,
    pub subdomain: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub member_count: i64,
    pub post_count: i64,
    pub activity_score: i64,
    pub created_at: Option<i64>,
}

/// Public user listing with aggregated karma
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_id: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub profile_picture: Option<String>,
    pub forum_count: i64,
    pub post_count: i64,
    pub karma: i64,
    pub created_at: Option<i64>,
}

/// Hashtag topic with occurrence counters and trending score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub name: String,
    pub post_count: i64,
    pub engagement: i64,
    pub forum_count: i64,
    pub trending: i64,
}

/// One page of ranked entities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPage<T> {
    pub items: Vec<T>,
    /// Number of items returned, after the limit
    pub total: usize,
    /// Criterion actually applied; an unknown request reports the default
    pub sorted_by: &'static str,
}
