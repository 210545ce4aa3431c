//! Topic list parsing.
//!
//! Listing pages share one content box (`body > #Wrapper > .content > #Main
//! > .box`). Tab listings put their rows under `.item` tables and carry the
//! node in each row; node listings put them under `#TopicsNode` and add a
//! page-number input and a favorite toggle to the same box.
//!
//! Every decoder fails fast. One malformed row aborts the whole parse; no
//! partial list is returned.

use dom_query::{Document, NodeRef};
use tracing::debug;

pub mod draft;
pub mod favorite;
pub mod info;
pub mod member;
pub mod node;
pub mod pagination;
pub mod reply;
pub mod row;
pub mod title;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::page::{Node, Page};
use crate::patterns::{CONTENT_BOX_PATH, NODE_ROWS_PATH, TAB_ROWS_PATH};
use crate::result::TopicList;
use crate::selector::{self, ChildPath};

pub use favorite::FavoriteState;
pub use info::NodeSource;
pub use row::{RowLayout, ROW_LAYOUT};

/// Parse the topic list of a listing page.
///
/// The page kind selects the row layout. `FavoriteNodes` has no topic rows
/// and is rejected before the document is touched.
pub fn parse_document(doc: &Document, page: &Page, options: &Options) -> Result<TopicList> {
    let list = match page {
        Page::Tab(_) | Page::FavoriteTopics => {
            parse_tab_listing(&locate_content_box(doc)?, options)?
        }
        Page::Node(node) => parse_node_listing(&locate_content_box(doc)?, node, options)?,
        Page::FavoriteNodes => return Err(Error::UnsupportedPageKind(page.to_string())),
    };

    debug!(
        page = %page,
        topics = list.len(),
        max_page = list.max_page(),
        favorited = list.favorited(),
        "Parsed topic list"
    );
    Ok(list)
}

/// Find the content box shared by every listing page.
///
/// The `body` element is found breadth-first; each following step only
/// looks at immediate children and takes the first match.
pub fn locate_content_box(doc: &Document) -> Result<NodeRef<'_>> {
    let body = selector::bfs(doc.root(), "body")
        .ok_or_else(|| Error::StructureNotFound("document has no body".to_string()))?;

    selector::first_along(body, CONTENT_BOX_PATH)
        .map_err(|step| Error::StructureNotFound(format!("content box: no {step} element")))
}

fn parse_tab_listing(content_box: &NodeRef, options: &Options) -> Result<TopicList> {
    let topics = ChildPath::new(*content_box)
        .children(TAB_ROWS_PATH)
        .into_nodes()
        .iter()
        .map(|tr| row::parse_tab_row(tr, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(TopicList::new(topics, 1, false, None))
}

fn parse_node_listing(content_box: &NodeRef, node: &Node, options: &Options) -> Result<TopicList> {
    let max_page = pagination::parse_max_page(content_box)?;
    let FavoriteState {
        favorited,
        once_token,
    } = favorite::parse_favorite(content_box, options.authenticated)?;

    let topics = ChildPath::new(*content_box)
        .children(NODE_ROWS_PATH)
        .into_nodes()
        .iter()
        .map(|tr| row::parse_node_row(tr, node, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(TopicList::new(topics, max_page, favorited, once_token))
}
