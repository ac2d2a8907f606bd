use super::Rankable;
use crate::models::{ForumStats, TopicStats, UserStats};
use std::fmt;

/// Kinds of entity the discovery feed ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Forum,
    User,
    Topic,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Forum => "forum",
            EntityKind::User => "user",
            EntityKind::Topic => "topic",
        }
    }

    /// Criterion used when the request names none or an unknown one
    pub fn default_criterion(&self) -> &'static str {
        match self {
            EntityKind::Forum => ForumSort::default().as_str(),
            EntityKind::User => UserSort::default().as_str(),
            EntityKind::Topic => TopicSort::default().as_str(),
        }
    }

    /// Every criterion accepted for this kind
    pub fn criteria(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Forum => &["activity", "members", "posts", "newest"],
            EntityKind::User => &["karma", "forums", "activity", "newest"],
            EntityKind::Topic => &["trending", "posts", "engagement"],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of sort criteria for one entity kind
pub trait SortCriterion: Copy + Default + fmt::Debug {
    const KIND: EntityKind;

    /// Exact, lower-case match against the criterion names
    fn parse(raw: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;

    /// Parsed criterion, or the kind's default
    fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForumSort {
    #[default]
    Activity,
    Members,
    Posts,
    Newest,
}

impl SortCriterion for ForumSort {
    const KIND: EntityKind = EntityKind::Forum;

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "activity" => Some(ForumSort::Activity),
            "members" => Some(ForumSort::Members),
            "posts" => Some(ForumSort::Posts),
            "newest" => Some(ForumSort::Newest),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ForumSort::Activity => "activity",
            ForumSort::Members => "members",
            ForumSort::Posts => "posts",
            ForumSort::Newest => "newest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSort {
    #[default]
    Karma,
    Forums,
    /// Number of posts authored
    Activity,
    Newest,
}

impl SortCriterion for UserSort {
    const KIND: EntityKind = EntityKind::User;

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "karma" => Some(UserSort::Karma),
            "forums" => Some(UserSort::Forums),
            "activity" => Some(UserSort::Activity),
            "newest" => Some(UserSort::Newest),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            UserSort::Karma => "karma",
            UserSort::Forums => "forums",
            UserSort::Activity => "activity",
            UserSort::Newest => "newest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicSort {
    #[default]
    Trending,
    Posts,
    Engagement,
}

impl SortCriterion for TopicSort {
    const KIND: EntityKind = EntityKind::Topic;

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "trending" => Some(TopicSort::Trending),
            "posts" => Some(TopicSort::Posts),
            "engagement" => Some(TopicSort::Engagement),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            TopicSort::Trending => "trending",
            TopicSort::Posts => "posts",
            TopicSort::Engagement => "engagement",
        }
    }
}

impl Rankable for ForumStats {
    type Criterion = ForumSort;

    fn sort_value(&self, criterion: ForumSort) -> i64 {
        match criterion {
            ForumSort::Activity => self.activity_score,
            ForumSort::Members => self.member_count,
            ForumSort::Posts => self.post_count,
            ForumSort::Newest => self.created_at.unwrap_or(0),
        }
    }
}

impl Rankable for UserStats {
    type Criterion = UserSort;

    fn sort_value(&self, criterion: UserSort) -> i64 {
        match criterion {
            UserSort::Karma => self.karma,
            UserSort::Forums => self.forum_count,
            UserSort::Activity => self.post_count,
            UserSort::Newest => self.created_at.unwrap_or(0),
        }
    }
}

impl Rankable for TopicStats {
    type Criterion = TopicSort;

    fn sort_value(&self, criterion: TopicSort) -> i64 {
        match criterion {
            TopicSort::Trending => self.trending,
            TopicSort::Posts => self.post_count,
            TopicSort::Engagement => self.engagement,
        }
    }
}
