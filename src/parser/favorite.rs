//! Favorite toggle of a node listing.
//!
//! Signed-in users see a link in the node header that either favorites
//! (`/favorite/node/12?once=...`) or unfavorites (`/unfavorite/node/12?once=...`)
//! the node. Anonymous users see no link at all.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::FAVORITE_LINK_PATH;
use crate::selector::ChildPath;

/// Href prefix of the link shown when the node is already favorited.
const UNFAVORITE_PREFIX: &str = "/unfav";

/// Query marker in front of the single-use token.
const ONCE_MARKER: &str = "?once=";

/// Favorite state decoded from a node header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteState {
    pub favorited: bool,
    pub once_token: Option<String>,
}

/// Decode the favorite toggle.
///
/// Anonymous callers get the default state without the document being
/// inspected.
pub fn parse_favorite(content_box: &NodeRef, authenticated: bool) -> Result<FavoriteState> {
    if !authenticated {
        return Ok(FavoriteState::default());
    }

    let link = ChildPath::new(*content_box)
        .children(FAVORITE_LINK_PATH)
        .first()
        .ok_or_else(|| Error::unexpected("node header has no favorite link"))?;
    let href = dom::get_attribute(&link, "href").unwrap_or_default();

    Ok(FavoriteState {
        favorited: href.starts_with(UNFAVORITE_PREFIX),
        once_token: href
            .rsplit_once(ONCE_MARKER)
            .map(|(_, token)| token.to_string()),
    })
}
