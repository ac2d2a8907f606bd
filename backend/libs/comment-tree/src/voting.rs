/// Vote toggle arithmetic for comments
///
/// A user holds at most one vote per comment. Repeating the same vote removes
/// it, voting the other way flips it.
use crate::error::CommentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "up",
            VoteType::Down => "down",
        }
    }

    /// Contribution of a single vote of this type to a vote score
    pub fn weight(&self) -> i64 {
        match self {
            VoteType::Up => 1,
            VoteType::Down => -1,
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteType::Up),
            "down" => Ok(VoteType::Down),
            other => Err(CommentError::InvalidVoteType(other.to_string())),
        }
    }
}

/// Result of applying a vote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    /// Change to apply to the comment's vote score
    pub vote_change: i64,
    /// Vote stored for the user afterwards (`None` when removed)
    pub stored: Option<VoteType>,
}

/// Apply `requested` on top of the user's `existing` vote
pub fn apply_vote(existing: Option<VoteType>, requested: VoteType) -> VoteOutcome {
    match existing {
        None => VoteOutcome {
            vote_change: requested.weight(),
            stored: Some(requested),
        },
        Some(previous) if previous == requested => VoteOutcome {
            vote_change: -requested.weight(),
            stored: None,
        },
        Some(previous) => VoteOutcome {
            vote_change: requested.weight() - previous.weight(),
            stored: Some(requested),
        },
    }
}
