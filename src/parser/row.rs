//! Row decoding for tab and node listings.
//!
//! Listing rows carry no semantic labels on their cells, so columns are
//! addressed by position among the row's element children. The mapping is
//! kept in `ROW_LAYOUT`; a layout change only needs an edit there.

use dom_query::NodeRef;
use tracing::trace;

use super::draft::TopicDraft;
use super::info::{parse_info, NodeSource};
use super::member::parse_member;
use super::reply::parse_reply_count;
use super::title::parse_title;
use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::page::Node;
use crate::result::Topic;

/// Column positions within a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Avatar link of the author.
    pub member: usize,
    /// Title link plus the `.fade` annotation.
    pub title: usize,
    /// Reply-count badge.
    pub reply_count: usize,
}

/// Column 1 is a spacer cell and is not read.
pub const ROW_LAYOUT: RowLayout = RowLayout {
    member: 0,
    title: 2,
    reply_count: 3,
};

/// Decode a tab-listing row; the node is read from the row itself.
pub fn parse_tab_row(row: &NodeRef, options: &Options) -> Result<Topic> {
    parse_row(row, NodeSource::DecodedFromMarkup, options)
}

/// Decode a node-listing row; every row belongs to `node`.
pub fn parse_node_row(row: &NodeRef, node: &Node, options: &Options) -> Result<Topic> {
    parse_row(row, NodeSource::PreSupplied(node), options)
}

fn parse_row(row: &NodeRef, source: NodeSource<'_>, options: &Options) -> Result<Topic> {
    let cells = dom::element_children(row);
    let title_cell = column(&cells, ROW_LAYOUT.title, "title")?;

    let topic = TopicDraft::new()
        .with_member(parse_member(&column(&cells, ROW_LAYOUT.member, "member")?, options)?)
        .with_title(parse_title(&title_cell)?)
        .with_info(parse_info(&title_cell, source)?)
        .with_reply_count(parse_reply_count(&column(
            &cells,
            ROW_LAYOUT.reply_count,
            "reply count",
        )?)?);

    trace!(
        id = topic.id,
        node = %topic.node.name,
        replies = topic.reply_count,
        "Decoded topic row"
    );
    Ok(topic)
}

fn column<'a>(cells: &[NodeRef<'a>], index: usize, name: &str) -> Result<NodeRef<'a>> {
    cells.get(index).copied().ok_or_else(|| {
        Error::unexpected(format!(
            "row has {} cells, no {name} column at index {index}",
            cells.len()
        ))
    })
}
