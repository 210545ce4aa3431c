//! DOM Operations Adapter
//!
//! Read-only accessors over `dom_query` trees used by the decoders. The
//! parser never mutates the document, so only queries live here.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Check an element's tag name, ignoring ASCII case.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Check whether an element matches a CSS selector.
///
/// Non-element nodes never match.
#[must_use]
pub fn matches(node: &NodeRef, selector: &str) -> bool {
    node.is_element() && Selection::from(*node).is(selector)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

// === Tree Navigation ===

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Direct text-node children, in document order. Element children and
/// their descendants are skipped.
#[must_use]
pub fn text_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_text).collect()
}

/// First direct element child.
#[must_use]
pub fn first_element_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.children().into_iter().find(NodeRef::is_element)
}
