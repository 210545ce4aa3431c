//! Selector Infrastructure
//!
//! Structural queries over the parsed tree: a breadth-first search for the
//! first matching element, and child chains that only ever step to
//! *immediate* children. Listing pages nest the same class names at several
//! depths, so descendant selectors (`.box .cell`) would pick up the wrong
//! elements; child chains keep each step anchored to its parent.

use std::collections::VecDeque;

use dom_query::NodeRef;

use crate::dom;

/// Breadth-first search for the first element matching `selector`.
///
/// `root` itself is tested first. Returns `None` when nothing matches.
///
/// # Example
///
/// ```rust
/// use v2ex_topics::{dom, selector};
///
/// let doc = dom::parse("<html><body><div id='Wrapper'></div></body></html>");
/// let body = selector::bfs(doc.root(), "body");
/// assert!(body.is_some());
/// ```
#[must_use]
pub fn bfs<'a>(root: NodeRef<'a>, selector: &str) -> Option<NodeRef<'a>> {
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if dom::matches(&node, selector) {
            return Some(node);
        }
        queue.extend(dom::element_children(&node));
    }

    None
}

/// A set of elements reached by stepping through immediate children.
///
/// Each `child` step replaces the current set with the element children of
/// every current element that match the selector, preserving document order.
#[derive(Debug, Clone)]
pub struct ChildPath<'a> {
    nodes: Vec<NodeRef<'a>>,
}

impl<'a> ChildPath<'a> {
    /// Start a path at a single element.
    #[must_use]
    pub fn new(start: NodeRef<'a>) -> Self {
        Self { nodes: vec![start] }
    }

    /// Step to the immediate children matching `selector`.
    #[must_use]
    pub fn child(self, selector: &str) -> Self {
        let nodes = self
            .nodes
            .iter()
            .flat_map(|node| dom::element_children(node))
            .filter(|child| dom::matches(child, selector))
            .collect();
        Self { nodes }
    }

    /// Step through every selector in order.
    #[must_use]
    pub fn children(self, selectors: &[&str]) -> Self {
        selectors.iter().fold(self, |path, selector| path.child(selector))
    }

    /// First element of the set, in document order.
    #[must_use]
    pub fn first(&self) -> Option<NodeRef<'a>> {
        self.nodes.first().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All elements of the set, in document order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeRef<'a>> {
        self.nodes
    }
}

/// Walk a child chain from `start`, stopping at the first step that matches
/// nothing.
///
/// Returns the first element reached, or the selector of the failed step.
pub fn first_along<'a, 's>(start: NodeRef<'a>, selectors: &[&'s str]) -> Result<NodeRef<'a>, &'s str> {
    let mut current = start;
    for selector in selectors {
        current = ChildPath::new(current).child(selector).first().ok_or(*selector)?;
    }
    Ok(current)
}
