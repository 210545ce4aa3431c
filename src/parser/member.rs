//! Member cell decoding.
//!
//! The member column is always `<a href="/member/NAME"><img src="..."></a>`.
//! Both elements are mandatory.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::{Avatar, Member};
use crate::url_utils;

/// Decode the member cell of a row.
pub fn parse_member(cell: &NodeRef, options: &Options) -> Result<Member> {
    let link = dom::first_element_child(cell)
        .filter(|node| dom::is_tag(node, "a"))
        .ok_or_else(|| Error::unexpected("member cell does not start with a link"))?;
    let href = dom::get_attribute(&link, "href").unwrap_or_default();
    let username = url_utils::member_name_from_url(&href)
        .ok_or_else(|| Error::unexpected(format!("not a member link: {href:?}")))?;

    let img = dom::first_element_child(&link)
        .filter(|node| dom::is_tag(node, "img"))
        .ok_or_else(|| Error::unexpected(format!("member link of {username} has no avatar image")))?;
    let src = dom::get_attribute(&img, "src").unwrap_or_default();
    let url = if options.absolute_avatar_urls {
        url_utils::resolve_url(&src, &options.base_url)
    } else {
        src
    };

    Ok(Member {
        username,
        avatar: Avatar { url },
    })
}
