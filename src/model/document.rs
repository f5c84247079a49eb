//! Document-level types.

use super::Node;
use serde::{Deserialize, Serialize};

/// A converted wiki article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Article title
    pub title: String,

    /// Top-level nodes of the article body
    pub content: Vec<Node>,
}

impl Document {
    /// Create a new document.
    pub fn new(title: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(Node::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Count the nodes of the given kind anywhere in the tree.
    pub fn count_kind(&self, kind: &str) -> usize {
        fn count(nodes: &[Node], kind: &str) -> usize {
            nodes.iter().map(|node| count_node(node, kind)).sum()
        }

        fn count_node(node: &Node, kind: &str) -> usize {
            let own = usize::from(node.kind() == kind);
            let nested = match node {
                Node::Element(el) | Node::Unrecognized { original: el } => count(&el.children, kind),
                Node::Paragraph { children }
                | Node::InlineStyle { children, .. }
                | Node::Header { children, .. }
                | Node::Table { children } => count(children, kind),
                Node::List { children, .. } => children.iter().map(|item| count(item, kind)).sum(),
                Node::Image { caption, .. } => count(caption, kind),
                Node::Template { params, .. } => params
                    .values()
                    .filter_map(|value| value.as_content())
                    .map(|nodes| count(nodes, kind))
                    .sum(),
                Node::Text { .. } | Node::InlineMath { .. } => 0,
            };
            own + nested
        }

        count(&self.content, kind)
    }
}
