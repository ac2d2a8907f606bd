//! Comment Tree Library
//!
//! Turns the flat comment list of a post into the nested reply tree shown to
//! readers, and holds the pure rules that gate new replies and votes.
//!
//! # Modules
//!
//! - `models`: comment records and tree nodes
//! - `threading`: tree construction and ordering
//! - `validation`: reply depth gate and content checks
//! - `voting`: up/down vote toggle arithmetic
//! - `error`: error types

pub mod error;
pub mod models;
pub mod threading;
pub mod validation;
pub mod voting;

pub use error::{CommentError, Result};
pub use models::{Comment, CommentId, CommentNode, CommentThread};
pub use threading::{build_tree, thread};
pub use validation::{
    validate_content, validate_reply_depth, MAX_COMMENT_DEPTH, MAX_NESTING_LEVELS,
};
pub use voting::{apply_vote, VoteOutcome, VoteType};
