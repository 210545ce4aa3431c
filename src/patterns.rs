//! Compiled regex patterns and CSS selectors for topic list parsing.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// Reply-time annotation inside `.fade`: the text after the first bullet and
/// before the next bullet (or end of text).
///
/// `" • 3 小时前 • 最后回复来自 "` captures `"3 小时前"`.
pub static REPLY_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"•\s*(.+?)(?:\s+•|$)").expect("REPLY_TIME regex"));

/// Runs of whitespace, including `&nbsp;`, collapsed before matching.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// URL Patterns
// =============================================================================

/// Topic URL: `/t/123456` optionally followed by `#reply12` or a query.
pub static TOPIC_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/t/(\d+)(?:[#?/]|$)").expect("TOPIC_URL regex"));

/// Member profile URL: `/member/Livid`.
pub static MEMBER_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/member/([^/?#]+)").expect("MEMBER_URL regex"));

/// Node URL: `/go/python`.
pub static NODE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/go/([^/?#]+)").expect("NODE_URL regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Child chain from `body` to the content box shared by all listing pages.
pub const CONTENT_BOX_PATH: &[&str] = &["#Wrapper", ".content", "#Main", ".box"];

/// Rows of a tab listing, relative to the content box.
pub const TAB_ROWS_PATH: &[&str] = &[".item", "table", "tbody", "tr"];

/// Rows of a node listing, relative to the content box.
pub const NODE_ROWS_PATH: &[&str] = &["#TopicsNode", ".cell", "table", "tbody", "tr"];

/// Page-number input of a node listing, relative to the content box.
pub const PAGE_INPUT_PATH: &[&str] =
    &[".cell", "table", "tbody", "tr", "td[align=left]", "input.page_input"];

/// Favorite toggle link in a node header, relative to the content box.
pub const FAVORITE_LINK_PATH: &[&str] = &[".node_header", ".node_info", ".fr", "a.node_header_link"];

/// Title anchor, relative to the title cell.
pub const TITLE_ANCHOR_PATH: &[&str] = &[".item_title", "a"];
