use serde::{Deserialize, Serialize};

/// Opaque comment identifier (UUID string in the store)
pub type CommentId = String;

/// Comment entity - one record per author action on a post
///
/// Field names follow the stored document shape (`commentId`, `parentId`,
/// `voteScore`, ...). Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "commentId")]
    pub id: CommentId,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    #[serde(default)]
    pub depth: i32,
    #[serde(default)]
    pub vote_score: i64,
    #[serde(default)]
    pub reply_count: i64,
    pub created_at: i64,
}

impl Comment {
    /// Top-level comment with no votes yet
    pub fn new(id: impl Into<CommentId>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            post_id: String::new(),
            author_id: String::new(),
            content: String::new(),
            parent_id: None,
            depth: 0,
            vote_score: 0,
            reply_count: 0,
            created_at,
        }
    }

    /// Attach to a parent at the given depth
    pub fn with_parent(mut self, parent_id: impl Into<CommentId>, depth: i32) -> Self {
        self.parent_id = Some(parent_id.into());
        self.depth = depth;
        self
    }

    pub fn with_vote_score(mut self, vote_score: i64) -> Self {
        self.vote_score = vote_score;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Comment plus its ordered replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn leaf(comment: Comment) -> Self {
        Self {
            comment,
            replies: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.replies.iter());
        }
        count
    }

    /// Deepest level below this node (0 for a leaf)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.replies.iter().map(|reply| (reply, level + 1)));
        }
        height
    }
}

/// Threaded comments of one post, as returned to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentThread {
    pub comments: Vec<CommentNode>,
    /// Number of comment records fetched, including dropped replies
    pub total: usize,
}

impl CommentThread {
    /// Nodes actually present in the forest
    pub fn node_count(&self) -> usize {
        self.comments.iter().map(CommentNode::node_count).sum()
    }
}
