//! Page count of a node listing.

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::PAGE_INPUT_PATH;
use crate::selector::ChildPath;

/// Read the last page number from the page-number input.
///
/// Single-page listings render no input and yield 1.
pub fn parse_max_page(content_box: &NodeRef) -> Result<u32> {
    let Some(input) = ChildPath::new(*content_box).children(PAGE_INPUT_PATH).first() else {
        debug!("No page input, listing has a single page");
        return Ok(1);
    };

    let max = dom::get_attribute(&input, "max").unwrap_or_default();
    match max.trim().parse::<u32>() {
        Ok(pages) if pages >= 1 => Ok(pages),
        _ => Err(Error::unexpected(format!("page input has invalid max {max:?}"))),
    }
}
