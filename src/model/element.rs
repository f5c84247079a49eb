//! Generic markup elements.

use super::Node;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute map of an element, in source order.
pub type Attributes = IndexMap<String, String>;

/// A markup element as read from the source, before any rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (lowercase for HTML input)
    pub tag: String,

    /// Attributes, keys unique
    pub attrs: Attributes,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element without attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Whitespace-separated tokens of the `typeof` attribute.
    pub fn type_tokens(&self) -> impl Iterator<Item = &str> {
        self.attr("typeof").unwrap_or_default().split_whitespace()
    }

    /// Check whether `typeof` carries the given token.
    pub fn has_type(&self, token: &str) -> bool {
        self.type_tokens().any(|t| t == token)
    }

    /// Iterate over the direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Find the first descendant element with the given tag (depth-first).
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.tag == tag {
                Some(child)
            } else {
                child.find_descendant(tag)
            }
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
