use crate::models::{ForumRecord, PostRecord, UserRecord, UserStats};
use std::collections::HashMap;

/// Sum of vote scores over a user's posts
pub fn karma<'a>(posts: impl IntoIterator<Item = &'a PostRecord>) -> i64 {
    posts
        .into_iter()
        .fold(0i64, |total, post| total.saturating_add(post.vote_score.unwrap_or(0)))
}

#[derive(Debug, Default, Clone, Copy)]
struct AuthorTotals {
    post_count: i64,
    karma: i64,
}

/// Attach forum count, post count and karma to every user
///
/// Forums are counted by owner regardless of visibility; karma covers the
/// user's full post history. One pass over forums and posts builds the
/// per-user totals, then users are projected in input order.
pub fn user_stats(
    users: &[UserRecord],
    forums: &[ForumRecord],
    posts: &[PostRecord],
) -> Vec<UserStats> {
    let mut forums_by_owner: HashMap<&str, i64> = HashMap::new();
    for forum in forums {
        if let Some(owner) = forum.owner_id.as_deref() {
            *forums_by_owner.entry(owner).or_default() += 1;
        }
    }

    let mut totals_by_author: HashMap<&str, AuthorTotals> = HashMap::new();
    for post in posts {
        if let Some(author) = post.author_id.as_deref() {
            let totals = totals_by_author.entry(author).or_default();
            totals.post_count += 1;
            totals.karma = totals.karma.saturating_add(post.vote_score.unwrap_or(0));
        }
    }

    users
        .iter()
        .map(|user| {
            let totals = totals_by_author
                .get(user.user_id.as_str())
                .copied()
                .unwrap_or_default();

            UserStats {
                user_id: user.user_id.clone(),
                email: user.email.clone(),
                username: user.username.clone(),
                profile_picture: user.profile_picture.clone(),
                forum_count: forums_by_owner
                    .get(user.user_id.as_str())
                    .copied()
                    .unwrap_or(0),
                post_count: totals.post_count,
                karma: totals.karma,
                created_at: user.created_at,
            }
        })
        .collect()
}
