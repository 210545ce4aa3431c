//! `.fade` annotation decoding: the topic's node and its last-reply time.
//!
//! On tab listings the annotation reads
//! `<a class="node">Node</a> • <strong>author</strong> • 3 小时前 • 最后回复来自 ...`,
//! so the reply time sits in the second text node. Node listings omit the
//! node link and the reply time moves to the first text node. Rows without
//! replies stop after the author and have no reply-time text at all.

use dom_query::NodeRef;
use tracing::trace;

use super::draft::Info;
use super::node::parse_node;
use crate::dom;
use crate::error::{Error, Result};
use crate::page::Node;
use crate::patterns::{REPLY_TIME, WHITESPACE_NORMALIZE};
use crate::selector::ChildPath;

/// Where a row's node comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSource<'n> {
    /// The page is a node listing; every row belongs to this node.
    PreSupplied(&'n Node),

    /// The row renders its own node link inside `.fade`.
    DecodedFromMarkup,
}

impl NodeSource<'_> {
    /// Index of the reply-time text among `.fade`'s direct text nodes.
    #[must_use]
    pub const fn reply_time_index(&self) -> usize {
        match self {
            Self::PreSupplied(_) => 0,
            Self::DecodedFromMarkup => 1,
        }
    }
}

/// Decode node and reply time from the title cell's `.fade` element.
pub fn parse_info(cell: &NodeRef, source: NodeSource<'_>) -> Result<Info> {
    let fade = ChildPath::new(*cell)
        .child(".fade")
        .first()
        .ok_or_else(|| Error::unexpected("title cell has no .fade annotation"))?;

    let node = match source {
        NodeSource::PreSupplied(node) => node.clone(),
        NodeSource::DecodedFromMarkup => {
            let link = ChildPath::new(fade)
                .child(".node")
                .first()
                .ok_or_else(|| Error::unexpected(".fade annotation has no .node link"))?;
            parse_node(&link)?
        }
    };

    let reply_time = match dom::text_nodes(&fade).get(source.reply_time_index()) {
        Some(text) => parse_reply_time(&dom::text_content(text))?,
        None => {
            trace!(node = %node.name, "No reply time rendered");
            String::new()
        }
    };

    Ok(Info { node, reply_time })
}

/// Extract the relative time between the first bullet and the next one.
///
/// Text without a bullet is a format change and fails with
/// [`Error::TimeFormatError`].
pub fn parse_reply_time(text: &str) -> Result<String> {
    let normalized = WHITESPACE_NORMALIZE.replace_all(text, " ");

    REPLY_TIME
        .captures(&normalized)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| Error::TimeFormatError(normalized.trim().to_string()))
}
