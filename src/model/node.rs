//! Node types of the document tree.

use super::Element;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Template parameters, in invocation order.
pub type Params = IndexMap<String, ParamValue>;

/// A node of the document tree.
///
/// `Element` and `Text` come straight from the parser. All other variants
/// are produced by rewrite stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Raw markup element not yet rewritten
    Element(Element),

    /// Trimmed, non-empty text
    Text {
        /// Text content
        data: String,
    },

    /// A paragraph
    Paragraph {
        /// Paragraph content
        children: Vec<Node>,
    },

    /// Styled inline content (also used for table rows and cells)
    InlineStyle {
        /// Style applied to the children
        kind: StyleKind,
        /// Styled content
        children: Vec<Node>,
    },

    /// A section heading
    Header {
        /// Heading depth (1-4)
        depth: u8,
        /// Heading content
        children: Vec<Node>,
    },

    /// An ordered or unordered list
    List {
        /// Whether the list is numbered
        ordered: bool,
        /// One node group per list item
        children: Vec<Vec<Node>>,
    },

    /// A table; children are its rows
    Table {
        /// Table rows
        children: Vec<Node>,
    },

    /// An embedded image
    Image {
        /// File name without namespace
        name: String,
        /// Source URL of the rendered image
        url: String,
        /// Whether the image is shown as a thumbnail
        thumbnail: bool,
        /// Caption content
        caption: Vec<Node>,
    },

    /// An inline formula
    InlineMath {
        /// Formula source (TeX)
        formula: String,
    },

    /// A template invocation
    Template {
        /// Template name without namespace prefix
        name: String,
        /// Invocation parameters
        params: Params,
    },

    /// An element no rewrite recognized, kept verbatim
    Unrecognized {
        /// The source element
        original: Element,
    },
}

impl Node {
    /// Create a text node.
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text { data: data.into() }
    }

    /// Get the element if this node is a raw markup element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Check if this node is a raw markup element.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Name of the variant, as used in the serialized `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Text { .. } => "text",
            Node::Paragraph { .. } => "paragraph",
            Node::InlineStyle { .. } => "inline_style",
            Node::Header { .. } => "header",
            Node::List { .. } => "list",
            Node::Table { .. } => "table",
            Node::Image { .. } => "image",
            Node::InlineMath { .. } => "inline_math",
            Node::Template { .. } => "template",
            Node::Unrecognized { .. } => "unrecognized",
        }
    }

    /// Discriminant used by dispatch tables: the tag name for raw elements,
    /// the variant name otherwise. The two can coincide, e.g. `<table>` and
    /// [`Node::Table`] both give `table`.
    pub fn discriminant(&self) -> &str {
        match self {
            Node::Element(el) => &el.tag,
            other => other.kind(),
        }
    }

    /// Get the template name if this node is a template invocation.
    pub fn template_name(&self) -> Option<&str> {
        match self {
            Node::Template { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Plain text content of the node and its descendants.
    ///
    /// Text fragments are joined with single spaces; formulas are included
    /// verbatim, template parameters only when they hold content.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        fn all<'a>(nodes: &'a [Node], parts: &mut Vec<&'a str>) {
            for node in nodes {
                node.collect_text(parts);
            }
        }

        match self {
            Node::Text { data } => parts.push(data),
            Node::InlineMath { formula } => parts.push(formula),
            Node::Element(el) | Node::Unrecognized { original: el } => all(&el.children, parts),
            Node::Paragraph { children }
            | Node::InlineStyle { children, .. }
            | Node::Header { children, .. }
            | Node::Table { children } => all(children, parts),
            Node::List { children, .. } => {
                for item in children {
                    all(item, parts);
                }
            }
            Node::Image { caption, .. } => all(caption, parts),
            Node::Template { params, .. } => {
                for value in params.values() {
                    if let ParamValue::Content(nodes) = value {
                        all(nodes, parts);
                    }
                }
            }
        }
    }
}

/// Value of a template parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Raw parameter text
    Text(String),

    /// Parameter markup parsed into a sub-tree
    Content(Vec<Node>),
}

impl ParamValue {
    /// Get the raw text if the value was kept as a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Content(_) => None,
        }
    }

    /// Get the parsed nodes if the value is content.
    pub fn as_content(&self) -> Option<&[Node]> {
        match self {
            ParamValue::Content(nodes) => Some(nodes),
            ParamValue::Text(_) => None,
        }
    }
}

/// Kind of an `InlineStyle` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// `<i>`
    Italic,
    /// `<b>`
    Bold,
    /// `<dfn>`
    Dfn,
    /// `<th>`
    TableHeader,
    /// `<tr>`
    TableRow,
    /// `<td>`
    TableCell,
}

impl StyleKind {
    /// Map an HTML tag to its style kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "i" => Some(StyleKind::Italic),
            "b" => Some(StyleKind::Bold),
            "dfn" => Some(StyleKind::Dfn),
            "th" => Some(StyleKind::TableHeader),
            "tr" => Some(StyleKind::TableRow),
            "td" => Some(StyleKind::TableCell),
            _ => None,
        }
    }

    /// The HTML tag this kind originates from.
    pub fn tag(self) -> &'static str {
        match self {
            StyleKind::Italic => "i",
            StyleKind::Bold => "b",
            StyleKind::Dfn => "dfn",
            StyleKind::TableHeader => "th",
            StyleKind::TableRow => "tr",
            StyleKind::TableCell => "td",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_kind_tags() {
        for tag in ["i", "b", "dfn", "th", "tr", "td"] {
            assert_eq!(StyleKind::from_tag(tag).unwrap().tag(), tag);
        }
        assert!(StyleKind::from_tag("span").is_none());
    }

    #[test]
    fn test_discriminant() {
        let el: Node = Element::new("ul").into();
        assert_eq!(el.discriminant(), "ul");
        assert_eq!(Node::text("x").discriminant(), "text");
        assert_eq!(
            Node::InlineMath {
                formula: "x".into()
            }
            .discriminant(),
            "inline_math"
        );
    }

    #[test]
    fn test_plain_text() {
        let mut params = Params::new();
        params.insert("title".into(), ParamValue::Text("hidden".into()));
        params.insert(
            "definition".into(),
            ParamValue::Content(vec![Node::text("shown")]),
        );
        let node = Node::Paragraph {
            children: vec![
                Node::text("Let"),
                Node::InlineMath {
                    formula: "x".into(),
                },
                Node::Template {
                    name: "Definition".into(),
                    params,
                },
            ],
        };
        assert_eq!(node.plain_text(), "Let x shown");
    }

    #[test]
    fn test_serialize_tagged() {
        let node = Node::InlineStyle {
            kind: StyleKind::Bold,
            children: vec![Node::text("x")],
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "inline_style");
        assert_eq!(json["kind"], "bold");
        assert_eq!(json["children"][0]["data"], "x");
    }

    #[test]
    fn test_param_value_untagged() {
        let mut params = Params::new();
        params.insert("title".into(), ParamValue::Text("Menge".into()));
        params.insert(
            "definition".into(),
            ParamValue::Content(vec![Node::text("x")]),
        );
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["title"], "Menge");
        assert!(json["definition"].is_array());

        let back: Params = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }
}
