//! # v2ex-topics
//!
//! Topic list parser for V2EX listing pages.
//!
//! Given the HTML of a front-page tab, a node listing or the favorite-topics
//! page, this library returns the listed topics (id, title, author, node,
//! last-reply time, reply count) together with the page count and, for node
//! listings seen by a signed-in user, the favorite state and its once-token.
//!
//! ## Quick Start
//!
//! ```rust
//! use v2ex_topics::{parse_topic_list, Page, Tab};
//!
//! let html = r#"<html><body><div id="Wrapper"><div class="content"><div id="Main">
//! <div class="box"><div class="cell item"><table><tr>
//!   <td><a href="/member/Livid"><img src="//cdn.v2ex.com/avatar/livid.png"></a></td>
//!   <td></td>
//!   <td><span class="item_title"><a href="/t/1">Hello</a></span>
//!       <span class="fade"><a class="node" href="/go/v2ex">V2EX</a> • <strong>Livid</strong> • 3 小时前</span></td>
//!   <td><a class="count_livid">12</a></td>
//! </tr></table></div></div>
//! </div></div></div></body></html>"#;
//!
//! let topics = parse_topic_list(html, &Page::Tab(Tab::all_topics()))?;
//! assert_eq!(topics.len(), 1);
//! assert_eq!(topics[0].reply_time, "3 小时前");
//! assert_eq!(topics[0].reply_count, 12);
//! # Ok::<(), v2ex_topics::Error>(())
//! ```
//!
//! ## Failure policy
//!
//! Parsing is all-or-nothing. Missing optional content falls back to a
//! default (empty reply time, zero replies, one page, not favorited); any
//! other structural surprise aborts the parse with an [`Error`].

mod error;
mod options;
mod page;
mod patterns;
mod result;

/// Read-only DOM accessors over `dom_query`.
pub mod dom;

/// Breadth-first search and child-chain queries.
pub mod selector;

/// Listing decoders and the page assembler.
pub mod parser;

/// Topic, member and node identity from site URLs.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_BASE_URL};
pub use page::{Node, Page, Tab};
pub use parser::parse_document;
pub use result::{Avatar, Member, Topic, TopicList};

/// Parses a listing page using default options (anonymous session).
#[allow(clippy::missing_errors_doc)]
pub fn parse_topic_list(html: &str, page: &Page) -> Result<TopicList> {
    parse_topic_list_with_options(html, page, &Options::default())
}

/// Parses a listing page with custom options.
///
/// # Example
///
/// ```rust
/// use v2ex_topics::{parse_topic_list_with_options, Error, Node, Options, Page};
///
/// let options = Options {
///     authenticated: true,
///     ..Options::default()
/// };
/// let page = Page::Node(Node::new("python", "Python"));
/// let result = parse_topic_list_with_options("<html><body></body></html>", &page, &options);
/// assert!(matches!(result, Err(Error::StructureNotFound(_))));
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_topic_list_with_options(html: &str, page: &Page, options: &Options) -> Result<TopicList> {
    let doc = dom::parse(html);
    parse_document(&doc, page, options)
}

/// Parses a listing page from raw bytes, honouring the document's declared
/// charset.
///
/// Invalid characters are replaced with U+FFFD rather than causing errors.
#[allow(clippy::missing_errors_doc)]
pub fn parse_topic_list_bytes(html: &[u8], page: &Page, options: &Options) -> Result<TopicList> {
    let html_str = encoding::transcode_to_utf8(html);
    parse_topic_list_with_options(&html_str, page, options)
}
