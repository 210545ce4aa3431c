//! Reply-count cell decoding.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};

/// Decode the reply count from the last column.
///
/// Topics without replies render an empty cell, which counts as zero.
pub fn parse_reply_count(cell: &NodeRef) -> Result<u32> {
    let Some(badge) = dom::first_element_child(cell) else {
        return Ok(0);
    };

    let text = dom::text_content(&badge);
    let text = text.trim();
    text.parse()
        .map_err(|_| Error::unexpected(format!("reply count is not a number: {text:?}")))
}
