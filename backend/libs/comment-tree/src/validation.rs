/// Validation rules applied before a comment or reply is stored
use crate::error::{CommentError, Result};

/// Deepest depth a comment can be created at. Comments at this depth accept
/// no replies, so depths 0..=4 make five levels in total.
pub const MAX_COMMENT_DEPTH: i32 = 4;

/// Number of nesting levels reported to clients
pub const MAX_NESTING_LEVELS: i32 = MAX_COMMENT_DEPTH + 1;

/// Depth for a new reply under a parent at `parent_depth`
///
/// Rejects when the parent is already at depth 4 or deeper.
pub fn validate_reply_depth(parent_depth: i32) -> Result<i32> {
    if parent_depth >= MAX_COMMENT_DEPTH {
        return Err(CommentError::DepthExceeded {
            parent_depth,
            max_levels: MAX_NESTING_LEVELS,
        });
    }

    Ok(parent_depth + 1)
}

/// Trimmed comment body, rejecting blank input
pub fn validate_content(raw: &str) -> Result<&str> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(CommentError::EmptyContent);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_depth_boundary() {
        assert_eq!(validate_reply_depth(3), Ok(4));
        assert_eq!(
            validate_reply_depth(4),
            Err(CommentError::DepthExceeded {
                parent_depth: 4,
                max_levels: 5
            })
        );
    }

    #[test]
    fn test_reply_depth_from_root() {
        assert_eq!(validate_reply_depth(0), Ok(1));
    }

    #[test]
    fn test_reply_depth_beyond_limit() {
        assert!(validate_reply_depth(7).is_err());
    }

    #[test]
    fn test_content_trimmed() {
        assert_eq!(validate_content("  hello world \n"), Ok("hello world"));
    }

    #[test]
    fn test_blank_content_rejected() {
        assert_eq!(validate_content(""), Err(CommentError::EmptyContent));
        assert_eq!(validate_content(" \t\n "), Err(CommentError::EmptyContent));
    }
}
