//! Hashtag Parser Utility
//!
//! Extracts #hashtags from post text for topic discovery.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for matching #hashtags
/// A tag is `#` followed by ASCII word characters or any non-ASCII character,
/// so tags in any script (and emoji) are picked up.
static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9A-Za-z_\x{80}-\x{10FFFF}]+").expect("Invalid hashtag regex")
});

/// Extract #hashtags from text
///
/// Returns every occurrence in order, lower-cased and without the `#`.
/// Repeated tags are kept; each occurrence counts towards the topic.
///
/// # Examples
/// ```
/// use discovery_service::services::topics::extract_hashtags;
///
/// let tags = extract_hashtags("#Rust tips #async and more #rust");
/// assert_eq!(tags, vec!["rust", "async", "rust"]);
/// ```
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_lowercase())
        .collect()
}
