//! Result types for topic list parsing.
//!
//! Everything here is built fresh per parse and never mutated afterwards.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::page::Node;

/// A member's avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    /// Image URL from the `src` attribute.
    pub url: String,
}

/// The author of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Username taken from the profile link.
    pub username: String,

    pub avatar: Avatar,
}

/// One row of a topic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Numeric topic id from the `/t/<id>` link.
    pub id: u64,

    /// Title as inner HTML of the title link. Inline markup and entities are
    /// kept as rendered.
    pub title: String,

    pub member: Member,

    /// Node the topic belongs to.
    pub node: Node,

    /// Relative last-reply time (`3 小时前`). Empty when the row shows none.
    pub reply_time: String,

    pub reply_count: u32,
}

/// Topics parsed from one listing page, with the page-level state.
///
/// Dereferences to `[Topic]` in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicList {
    topics: Vec<Topic>,
    max_page: u32,
    favorited: bool,
    once_token: Option<String>,
}

impl TopicList {
    pub(crate) fn new(
        topics: Vec<Topic>,
        max_page: u32,
        favorited: bool,
        once_token: Option<String>,
    ) -> Self {
        debug_assert!(max_page >= 1, "max_page must be at least 1");
        Self {
            topics,
            max_page,
            favorited,
            once_token,
        }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of pages in the listing. Always at least 1.
    #[must_use]
    pub fn max_page(&self) -> u32 {
        self.max_page
    }

    /// Whether the signed-in user has favorited the node. Always false for
    /// tab listings and anonymous callers.
    #[must_use]
    pub fn favorited(&self) -> bool {
        self.favorited
    }

    /// Single-use token for the favorite toggle link, when one was rendered.
    #[must_use]
    pub fn once_token(&self) -> Option<&str> {
        self.once_token.as_deref()
    }

    #[must_use]
    pub fn into_topics(self) -> Vec<Topic> {
        self.topics
    }
}

impl Deref for TopicList {
    type Target = [Topic];

    fn deref(&self) -> &Self::Target {
        &self.topics
    }
}

impl<'a> IntoIterator for &'a TopicList {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

impl IntoIterator for TopicList {
    type Item = Topic;
    type IntoIter = std::vec::IntoIter<Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.into_iter()
    }
}
