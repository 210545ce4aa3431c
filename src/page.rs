//! Page kinds a topic list can be requested for.
//!
//! A `Page` tells the parser which column layout to expect and, for node
//! listings, supplies the node every row belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A category (sub-forum) of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// URL slug, e.g. `python` for `/go/python`.
    pub name: String,

    /// Display title, e.g. `Python`.
    pub title: String,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    /// Path of the node listing, relative to the site root.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/go/{}", self.name)
    }

    /// Absolute URL of the node listing.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        join(base_url, &self.path())
    }
}

/// A front-page tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tab {
    title: &'static str,
    key: &'static str,
}

impl Tab {
    /// Every tab shown on the front page, in display order.
    pub const ALL: [Tab; 12] = [
        Tab::new("技术", "tech"),
        Tab::new("创意", "creative"),
        Tab::new("好玩", "play"),
        Tab::new("Apple", "apple"),
        Tab::new("酷工作", "jobs"),
        Tab::new("交易", "deals"),
        Tab::new("城市", "city"),
        Tab::new("问与答", "qna"),
        Tab::new("最热", "hot"),
        Tab::new("全部", "all"),
        Tab::new("R2", "r2"),
        Tab::new("关注", "members"),
    ];

    const fn new(title: &'static str, key: &'static str) -> Self {
        Self { title, key }
    }

    /// The "全部" tab, the site's default landing listing.
    #[must_use]
    pub const fn all_topics() -> Self {
        Self::ALL[9]
    }

    /// Looks a tab up by its query key (`tech`, `hot`, ...).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.key == key)
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Path of the tab listing, relative to the site root.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/?tab={}", self.key)
    }
}

/// Which listing a document was fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Page {
    /// A front-page tab; rows carry their own node.
    Tab(Tab),

    /// A node listing; every row belongs to this node.
    Node(Node),

    /// The signed-in user's favorited topics; laid out like a tab.
    FavoriteTopics,

    /// The signed-in user's favorited nodes. Rendered as a node grid, it has
    /// no topic rows.
    FavoriteNodes,
}

impl Page {
    /// Human readable title for the page.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Tab(tab) => tab.title(),
            Self::Node(node) => &node.title,
            Self::FavoriteTopics => "收藏的主题",
            Self::FavoriteNodes => "收藏的节点",
        }
    }

    /// Path of the page, relative to the site root.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Tab(tab) => tab.path(),
            Self::Node(node) => node.path(),
            Self::FavoriteTopics => "/my/topics".to_string(),
            Self::FavoriteNodes => "/my/nodes".to_string(),
        }
    }

    /// Absolute URL of the page.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        join(base_url, &self.path())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab(tab) => write!(f, "tab:{}", tab.key()),
            Self::Node(node) => write!(f, "node:{}", node.name),
            Self::FavoriteTopics => f.write_str("favorite-topics"),
            Self::FavoriteNodes => f.write_str("favorite-nodes"),
        }
    }
}

impl From<Tab> for Page {
    fn from(tab: Tab) -> Self {
        Self::Tab(tab)
    }
}

impl From<Node> for Page {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
