//! DOM Operations Adapter
//!
//! Thin wrappers over `dom_query` node handles. The inference engine works on
//! `NodeRef` values borrowed from one immutable `Document`; node identity is
//! the `NodeId` carried by every handle.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<body>` element, or the document node when there is none.
///
/// Structural addresses are computed relative to this node.
#[must_use]
pub fn body(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .unwrap_or_else(|| doc.root())
}

// === Tag/Node Information ===

/// Get tag name (lowercase), `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Class tokens in attribute order, duplicates kept.
#[must_use]
pub fn class_tokens(node: &NodeRef) -> Vec<String> {
    get_attribute(node, "class")
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Whether the element carries `token` in its class list.
#[must_use]
pub fn has_class(node: &NodeRef, token: &str) -> bool {
    get_attribute(node, "class").is_some_and(|class| class.split_whitespace().any(|c| c == token))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Node identity check (same node of the same tree).
#[inline]
#[must_use]
pub fn is_same_node(a: &NodeRef, b: &NodeRef) -> bool {
    a.id == b.id
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// For a text node this is the node's own data.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    Selection::from(*node).text()
}

// === Traversal ===

/// All descendants of `node` (excluding `node`) in document order.
#[must_use]
pub fn descendants<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        stack.extend(current.children().into_iter().rev());
        out.push(current);
    }
    out
}

/// Descendant elements with the given tag name, in document order.
#[must_use]
pub fn elements_by_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    descendants(node)
        .into_iter()
        .filter(|n| tag_name(n).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}

/// Text leaves under `node` whose trimmed data is non-empty, in document order.
#[must_use]
pub fn text_nodes_under<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    descendants(node)
        .into_iter()
        .filter(|n| n.is_text() && !text_content(n).trim().is_empty())
        .collect()
}
