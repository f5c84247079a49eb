//! Header and footer removal.
//!
//! Navigation boxes above and below an article are rendered by module
//! invocations (`{{#invoke:…}}`). After deinclusion they are ordinary
//! [`Node::Template`] nodes and can be dropped by name.

use crate::error::Result;
use crate::model::Node;
use crate::transform::{Prune, Transformation};

/// Template name prefix of page headers and footers.
pub const DEFAULT_RESERVED_PREFIX: &str = "#invoke:";

/// Check if a node is a header or footer template.
pub fn is_reserved_template(node: &Node, prefix: &str) -> bool {
    node.template_name()
        .is_some_and(|name| name.starts_with(prefix))
}

/// Build a pass removing every template whose name starts with `prefix`.
pub fn header_footer_pruner(prefix: &str) -> impl Transformation + '_ {
    Prune::nodes(move |node: &Node| is_reserved_template(node, prefix))
}

/// Remove header and footer templates from a forest.
pub fn remove_headers_footers(nodes: &[Node], prefix: &str) -> Result<Vec<Node>> {
    let pruned = header_footer_pruner(prefix).transform_nodes(nodes)?;
    log::debug!(
        "removed {} header/footer nodes at top level",
        nodes.len() - pruned.len()
    );
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ParamValue, Params};

    fn template(name: &str) -> Node {
        Node::Template {
            name: name.into(),
            params: Params::new(),
        }
    }

    fn article() -> Vec<Node> {
        let mut params = Params::new();
        params.insert(
            "satz".into(),
            ParamValue::Content(vec![template("#invoke:Navigation"), Node::text("inner")]),
        );
        vec![
            template("#invoke:Seite|oben"),
            Node::Paragraph {
                children: vec![Node::text("Text")],
            },
            Node::Template {
                name: "Satz".into(),
                params,
            },
            Node::Unrecognized {
                original: Element::new("div").with_child(template("#invoke:Seite|unten")),
            },
            template("#invoke:Seite|unten"),
        ]
    }

    #[test]
    fn test_removes_at_every_depth() {
        let out = remove_headers_footers(&article(), DEFAULT_RESERVED_PREFIX).unwrap();

        let kinds: Vec<_> = out.iter().map(Node::kind).collect();
        assert_eq!(kinds, vec!["paragraph", "template", "unrecognized"]);

        let Node::Template { params, .. } = &out[1] else {
            panic!("expected template");
        };
        assert_eq!(params["satz"].as_content().unwrap(), &[Node::text("inner")]);

        let Node::Unrecognized { original } = &out[2] else {
            panic!("expected unrecognized");
        };
        assert!(original.children.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = remove_headers_footers(&article(), DEFAULT_RESERVED_PREFIX).unwrap();
        let twice = remove_headers_footers(&once, DEFAULT_RESERVED_PREFIX).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_templates_kept() {
        let nodes = vec![template("Definition"), template("invoke")];
        let out = remove_headers_footers(&nodes, DEFAULT_RESERVED_PREFIX).unwrap();
        assert_eq!(out, nodes);
    }

    #[test]
    fn test_custom_prefix() {
        let nodes = vec![template("Navigation:Kopf"), template("#invoke:Seite")];
        let out = remove_headers_footers(&nodes, "Navigation:").unwrap();
        assert_eq!(out, vec![template("#invoke:Seite")]);
    }
}
