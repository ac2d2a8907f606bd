use crate::error::Result;
use crate::models::{ForumRecord, PostRecord, UserRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Point-in-time export of the forum store
///
/// Shape: `{"forums": [...], "users": [...], "posts": [...]}`; any missing
/// collection reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverySnapshot {
    #[serde(default)]
    pub forums: Vec<ForumRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
}

impl DiscoverySnapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            forums = snapshot.forums.len(),
            users = snapshot.users.len(),
            posts = snapshot.posts.len(),
            "Loaded discovery snapshot"
        );

        Ok(snapshot)
    }

    /// Forums listed in discovery; private forums still count towards their
    /// owner's forum total
    pub fn public_forums(&self) -> Vec<ForumRecord> {
        self.forums.iter().filter(|f| f.is_public).cloned().collect()
    }
}
