//! Recursive tree rewriting.
//!
//! A [`Transformation`] rewrites the three shapes a tree is made of: scalars
//! (strings), sequences (`[Node]`) and mappings (nodes, attribute maps,
//! template parameters). Every method defaults to the identity, rebuilding
//! sequences and mappings from the rewritten parts, so an implementation only
//! overrides what it changes.
//!
//! Three strategies are layered on top:
//!
//! - node-targeted rewrites, by overriding [`Transformation::rewrite`]
//! - type dispatch through a [`DispatchTable`]
//! - deletion through [`Prune`]
//!
//! Several rewrites combine into one pass with a [`RewriteChain`], and whole
//! passes run one after another in a [`Pipeline`].
//!
//! # Example
//!
//! ```
//! use wiki2doc::model::Node;
//! use wiki2doc::transform::Transformation;
//!
//! struct Shout;
//!
//! impl Transformation for Shout {
//!     fn transform_text(&self, text: &str) -> wiki2doc::Result<String> {
//!         Ok(text.to_uppercase())
//!     }
//! }
//!
//! let nodes = vec![Node::Paragraph { children: vec![Node::text("hi")] }];
//! let out = Shout.transform_nodes(&nodes).unwrap();
//! assert_eq!(out[0].plain_text(), "HI");
//! ```

mod chain;
mod dispatch;
mod pipeline;
mod prune;

pub use chain::{FnRule, RewriteChain, RewriteRule};
pub use dispatch::{DispatchTable, Handler};
pub use pipeline::Pipeline;
pub use prune::Prune;

use crate::error::Result;
use crate::model::{Attributes, Element, Node, ParamValue, Params};

/// Result of offering a node to a node-targeted rewrite.
///
/// `PassThrough` is not a failure: it hands the node back to the default
/// recursive rebuild. Failures travel as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rewrite {
    /// The node was replaced; the replacement is used as-is.
    Rewritten(Node),

    /// The rewrite does not apply to this node.
    #[default]
    PassThrough,
}

impl Rewrite {
    /// Check if the rewrite declined the node.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Rewrite::PassThrough)
    }

    /// Get the replacement node if one was produced.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Rewrite::Rewritten(node) => Some(node),
            Rewrite::PassThrough => None,
        }
    }
}

/// A recursive tree rewrite.
///
/// All methods default to the identity. Implementations recurse by calling
/// back into `transform_*` on `self`, which keeps overridden behavior active
/// at every depth.
pub trait Transformation {
    /// Offer a node to the rewrite before the default rebuild.
    ///
    /// A `Rewritten` node is returned without further recursion; the rewrite
    /// decides itself whether to descend into its own output.
    fn rewrite(&self, node: &Node) -> Result<Rewrite> {
        let _ = node;
        Ok(Rewrite::PassThrough)
    }

    /// Transform a single node.
    fn transform_node(&self, node: &Node) -> Result<Node> {
        match self.rewrite(node)? {
            Rewrite::Rewritten(replacement) => Ok(replacement),
            Rewrite::PassThrough => rebuild(self, node),
        }
    }

    /// Transform a sequence of nodes.
    fn transform_nodes(&self, nodes: &[Node]) -> Result<Vec<Node>> {
        nodes.iter().map(|node| self.transform_node(node)).collect()
    }

    /// Transform a scalar.
    fn transform_text(&self, text: &str) -> Result<String> {
        Ok(text.to_owned())
    }

    /// Transform an attribute mapping.
    fn transform_attrs(&self, attrs: &Attributes) -> Result<Attributes> {
        attrs
            .iter()
            .map(|(key, value)| Ok((key.clone(), self.transform_text(value)?)))
            .collect()
    }

    /// Transform a template parameter mapping.
    fn transform_params(&self, params: &Params) -> Result<Params> {
        params
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    ParamValue::Text(text) => ParamValue::Text(self.transform_text(text)?),
                    ParamValue::Content(nodes) => ParamValue::Content(self.transform_nodes(nodes)?),
                };
                Ok((key.clone(), value))
            })
            .collect()
    }
}

/// Rebuild a raw element with transformed attributes and children.
pub fn rebuild_element<T: Transformation + ?Sized>(t: &T, el: &Element) -> Result<Element> {
    Ok(Element {
        tag: el.tag.clone(),
        attrs: t.transform_attrs(&el.attrs)?,
        children: t.transform_nodes(&el.children)?,
    })
}

/// Default rewrite of a node: same variant, every part transformed.
pub fn rebuild<T: Transformation + ?Sized>(t: &T, node: &Node) -> Result<Node> {
    Ok(match node {
        Node::Element(el) => Node::Element(rebuild_element(t, el)?),
        Node::Text { data } => Node::Text {
            data: t.transform_text(data)?,
        },
        Node::Paragraph { children } => Node::Paragraph {
            children: t.transform_nodes(children)?,
        },
        Node::InlineStyle { kind, children } => Node::InlineStyle {
            kind: *kind,
            children: t.transform_nodes(children)?,
        },
        Node::Header { depth, children } => Node::Header {
            depth: *depth,
            children: t.transform_nodes(children)?,
        },
        Node::List { ordered, children } => Node::List {
            ordered: *ordered,
            children: children
                .iter()
                .map(|item| t.transform_nodes(item))
                .collect::<Result<_>>()?,
        },
        Node::Table { children } => Node::Table {
            children: t.transform_nodes(children)?,
        },
        Node::Image {
            name,
            url,
            thumbnail,
            caption,
        } => Node::Image {
            name: t.transform_text(name)?,
            url: t.transform_text(url)?,
            thumbnail: *thumbnail,
            caption: t.transform_nodes(caption)?,
        },
        Node::InlineMath { formula } => Node::InlineMath {
            formula: t.transform_text(formula)?,
        },
        Node::Template { name, params } => Node::Template {
            name: t.transform_text(name)?,
            params: t.transform_params(params)?,
        },
        Node::Unrecognized { original } => Node::Unrecognized {
            original: rebuild_element(t, original)?,
        },
    })
}

/// The identity transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transformation for Identity {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleKind;

    fn sample() -> Vec<Node> {
        let mut params = Params::new();
        params.insert("title".into(), ParamValue::Text("t".into()));
        params.insert(
            "body".into(),
            ParamValue::Content(vec![Node::Element(
                Element::new("b").with_child(Node::text("x")),
            )]),
        );
        vec![
            Node::Element(
                Element::new("div")
                    .with_attr("class", "c")
                    .with_child(Node::text("a")),
            ),
            Node::List {
                ordered: true,
                children: vec![vec![Node::text("1")], vec![]],
            },
            Node::Template {
                name: "T".into(),
                params,
            },
        ]
    }

    #[test]
    fn test_identity() {
        let nodes = sample();
        assert_eq!(Identity.transform_nodes(&nodes).unwrap(), nodes);
    }

    struct BoldToItalic;

    impl Transformation for BoldToItalic {
        fn rewrite(&self, node: &Node) -> Result<Rewrite> {
            match node.as_element() {
                Some(el) if el.tag == "b" => Ok(Rewrite::Rewritten(Node::InlineStyle {
                    kind: StyleKind::Italic,
                    children: self.transform_nodes(&el.children)?,
                })),
                _ => Ok(Rewrite::PassThrough),
            }
        }
    }

    #[test]
    fn test_targeted_rewrite_reaches_params() {
        let out = BoldToItalic.transform_nodes(&sample()).unwrap();
        let Node::Template { params, .. } = &out[2] else {
            panic!("expected template");
        };
        assert_eq!(
            params["body"].as_content().unwrap()[0],
            Node::InlineStyle {
                kind: StyleKind::Italic,
                children: vec![Node::text("x")],
            }
        );
        assert_eq!(params["title"].as_text(), Some("t"));
    }

    struct Wrap;

    impl Transformation for Wrap {
        fn rewrite(&self, node: &Node) -> Result<Rewrite> {
            match node {
                Node::Text { .. } => Ok(Rewrite::Rewritten(Node::Paragraph {
                    children: vec![node.clone()],
                })),
                _ => Ok(Rewrite::PassThrough),
            }
        }
    }

    #[test]
    fn test_rewritten_not_recursed() {
        // The replacement contains a text node again; it must not be wrapped twice.
        let out = Wrap.transform_node(&Node::text("x")).unwrap();
        assert_eq!(
            out,
            Node::Paragraph {
                children: vec![Node::text("x")]
            }
        );
    }

    #[test]
    fn test_rewrite_helpers() {
        assert!(Rewrite::default().is_pass_through());
        assert_eq!(
            Rewrite::Rewritten(Node::text("x")).into_node(),
            Some(Node::text("x"))
        );
        assert!(Rewrite::PassThrough.into_node().is_none());
    }
}
