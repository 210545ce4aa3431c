//! Title anchor decoding.

use dom_query::NodeRef;

use super::draft::Headline;
use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::TITLE_ANCHOR_PATH;
use crate::selector::ChildPath;
use crate::url_utils;

/// Decode the topic id and title from `.item_title > a`.
///
/// The title is the anchor's inner HTML as rendered; it is not unescaped.
pub fn parse_title(cell: &NodeRef) -> Result<Headline> {
    let anchor = ChildPath::new(*cell)
        .children(TITLE_ANCHOR_PATH)
        .first()
        .ok_or_else(|| Error::unexpected("title cell has no .item_title > a"))?;
    let href = dom::get_attribute(&anchor, "href").unwrap_or_default();
    let id = url_utils::topic_id_from_url(&href)
        .ok_or_else(|| Error::unexpected(format!("not a topic link: {href:?}")))?;

    Ok(Headline {
        id,
        title: dom::inner_html(&anchor).to_string(),
    })
}
