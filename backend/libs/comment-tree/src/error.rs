/// Error types for comment threading rules
///
/// Every variant is a client-side rejection; callers surface them as HTTP 400
/// before anything is persisted.
use thiserror::Error;

/// Result type for comment operations
pub type Result<T> = std::result::Result<T, CommentError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// Parent comment already sits at the deepest allowed level
    #[error("Maximum nesting depth reached ({max_levels} levels)")]
    DepthExceeded { parent_depth: i32, max_levels: i32 },

    /// Comment body is empty after trimming
    #[error("Content is required")]
    EmptyContent,

    /// Vote type other than "up" or "down"
    #[error("Invalid vote type: {0}")]
    InvalidVoteType(String),
}

impl CommentError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DepthExceeded { .. } => 400,
            Self::EmptyContent => 400,
            Self::InvalidVoteType(_) => 400,
        }
    }
}
