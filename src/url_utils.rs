//! URL Utility Functions
//!
//! Identity extraction from site links (topic ids, usernames, node names)
//! and resolution of relative image URLs.

use url::Url;

use crate::patterns::{MEMBER_URL, NODE_URL, TOPIC_URL};

/// Extract the numeric topic id from a topic link.
///
/// Accepts relative (`/t/123#reply4`) and absolute links.
///
/// # Returns
/// * `None` when the link is not a topic link or the id overflows.
#[must_use]
pub fn topic_id_from_url(url: &str) -> Option<u64> {
    TOPIC_URL
        .captures(url)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the username from a member profile link (`/member/Livid`).
#[must_use]
pub fn member_name_from_url(url: &str) -> Option<String> {
    MEMBER_URL
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the node name from a node link (`/go/python`).
#[must_use]
pub fn node_name_from_url(url: &str) -> Option<String> {
    NODE_URL
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolve a possibly relative or protocol-relative URL against `base`.
///
/// Absolute URLs are returned unchanged. When the base itself cannot be
/// parsed, or joining fails, the input is returned unchanged.
#[must_use]
pub fn resolve_url(url_str: &str, base: &str) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || Url::parse(url_str).is_ok() {
        return url_str.to_string();
    }

    Url::parse(base)
        .and_then(|base| base.join(url_str))
        .map_or_else(|_| url_str.to_string(), |resolved| resolved.to_string())
}
