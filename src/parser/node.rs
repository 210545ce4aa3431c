//! Node link decoding, shared by every page that renders `<a class="node">`.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};
use crate::page::Node;
use crate::url_utils;

/// Decode a node link (`<a class="node" href="/go/python">Python</a>`).
///
/// The name comes from the `/go/<name>` href, the title from the link text.
pub fn parse_node(link: &NodeRef) -> Result<Node> {
    let href = dom::get_attribute(link, "href").unwrap_or_default();
    let name = url_utils::node_name_from_url(&href)
        .ok_or_else(|| Error::unexpected(format!("not a node link: {href:?}")))?;
    let title = dom::text_content(link).trim().to_string();

    Ok(Node { name, title })
}
