/// Comment threading - builds the reply tree shown under a post
///
/// Roots are ordered by vote score (highest first) and replies by creation
/// time (oldest first, so conversations read top to bottom). Both sorts are
/// stable. Replies whose parent is not in the input are dropped along with
/// their subtree, as are replies whose recorded depth does not continue their
/// parent's. Tree height is therefore bounded by `MAX_COMMENT_DEPTH`.
use crate::models::{Comment, CommentNode, CommentThread};
use crate::validation::validate_reply_depth;
use std::collections::HashMap;
use tracing::debug;

/// Whether `reply` could have been created under `parent` by the depth gate
fn continues_depth(parent: &Comment, reply: &Comment) -> bool {
    parent.depth >= 0 && validate_reply_depth(parent.depth) == Ok(reply.depth)
}

/// Build the ordered comment forest from a flat list of one post's comments
pub fn build_tree(comments: &[Comment]) -> Vec<CommentNode> {
    let index: HashMap<&str, usize> = comments
        .iter()
        .enumerate()
        .map(|(i, comment)| (comment.id.as_str(), i))
        .collect();

    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut unresolved = 0usize;
    let mut inconsistent = 0usize;

    for (i, comment) in comments.iter().enumerate() {
        match comment.parent_id.as_deref() {
            None => roots.push(i),
            Some(parent_id) => match index.get(parent_id) {
                Some(&parent) if continues_depth(&comments[parent], comment) => {
                    children[parent].push(i)
                }
                Some(_) => inconsistent += 1,
                None => unresolved += 1,
            },
        }
    }

    roots.sort_by(|&a, &b| comments[b].vote_score.cmp(&comments[a].vote_score));
    for replies in children.iter_mut() {
        replies.sort_by_key(|&i| comments[i].created_at);
    }

    // Breadth-first order from the roots: parents always precede their
    // replies, and anything not reachable from a root is skipped.
    let mut order: Vec<usize> = Vec::with_capacity(comments.len());
    let mut visited = vec![false; comments.len()];
    let mut cursor = 0;
    for &root in &roots {
        visited[root] = true;
        order.push(root);
    }
    while cursor < order.len() {
        let current = order[cursor];
        cursor += 1;
        for &reply in &children[current] {
            if !visited[reply] {
                visited[reply] = true;
                order.push(reply);
            }
        }
    }

    // Assemble bottom-up so every node owns its finished replies
    let mut built: Vec<Option<CommentNode>> = vec![None; comments.len()];
    for &i in order.iter().rev() {
        let replies = children[i]
            .iter()
            .filter_map(|&reply| built[reply].take())
            .collect();
        built[i] = Some(CommentNode {
            comment: comments[i].clone(),
            replies,
        });
    }

    let forest: Vec<CommentNode> = roots
        .iter()
        .filter_map(|&root| built[root].take())
        .collect();

    let dropped = comments.len() - order.len();
    if dropped > 0 {
        debug!(
            total = comments.len(),
            dropped,
            unresolved_parents = unresolved,
            inconsistent_depths = inconsistent,
            "Dropped comments without a reachable root"
        );
    }

    forest
}

/// Build the tree and wrap it with the fetched comment count
pub fn thread(comments: &[Comment]) -> CommentThread {
    CommentThread {
        comments: build_tree(comments),
        total: comments.len(),
    }
}
