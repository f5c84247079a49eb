//! Structural normalization.
//!
//! Turns the raw elements left after deinclusion into semantic nodes. All
//! rules run as one [`RewriteChain`] pass, asked in this order:
//!
//! 1. inline formulas (`typeof="mw:Extension/math"`)
//! 2. structural elements: lists, tables, figures
//! 3. plain tag mapping: paragraphs, inline styles, headings
//! 4. everything else becomes [`Node::Unrecognized`]
//!
//! Text and semantic nodes pass through; template parameters are normalized
//! recursively by the default rebuild.

mod figures;
mod lists;
mod math;
mod tables;
mod tags;

pub use figures::resource_name;

use crate::error::Result;
use crate::model::Node;
use crate::transform::{DispatchTable, FnRule, Rewrite, RewriteChain, Transformation};

/// Union of the list, table and figure handlers.
pub fn structural_table() -> Result<DispatchTable> {
    DispatchTable::new("structural")
        .merge(lists::table())?
        .merge(tables::table())?
        .merge(figures::table())
}

/// Paragraph, inline style and heading handlers.
pub fn tag_table() -> DispatchTable {
    tags::table()
}

/// Build the normalization pass.
pub fn normalizer() -> Result<RewriteChain> {
    Ok(RewriteChain::new()
        .with_rule(FnRule::new("math", math::math))
        .with_rule(structural_table()?)
        .with_rule(tag_table())
        .with_rule(FnRule::new("unrecognized", unrecognized)))
}

/// Normalize a forest.
pub fn normalize(nodes: &[Node]) -> Result<Vec<Node>> {
    normalizer()?.transform_nodes(nodes)
}

/// Any element still raw at this point is kept verbatim. Nodes already
/// marked unrecognized are not revisited.
fn unrecognized(_: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    match node {
        Node::Element(el) => {
            log::debug!("unrecognized element <{}>", el.tag);
            Ok(Rewrite::Rewritten(Node::Unrecognized {
                original: el.clone(),
            }))
        }
        Node::Unrecognized { .. } => Ok(Rewrite::Rewritten(node.clone())),
        _ => Ok(Rewrite::PassThrough),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ParamValue, Params, StyleKind};
    use crate::parser::HtmlParser;

    fn run(markup: &str) -> Vec<Node> {
        let nodes = HtmlParser::new().parse(markup).unwrap();
        normalize(&nodes).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let chain = normalizer().unwrap();
        assert_eq!(
            chain.rule_names(),
            vec!["math", "structural", "tags", "unrecognized"]
        );
    }

    #[test]
    fn test_tables_do_not_overlap() {
        let structural = structural_table().unwrap();
        assert_eq!(
            structural.discriminants(),
            vec!["figure", "ol", "table", "ul"]
        );
        assert!(structural.merge(tag_table()).is_ok());
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            run("<ul><li>A</li><li>B</li></ul>"),
            vec![Node::List {
                ordered: false,
                children: vec![vec![Node::text("A")], vec![Node::text("B")]],
            }]
        );
    }

    #[test]
    fn test_span_unrecognized() {
        let out = run(r#"<span class="x">a <b>b</b></span>"#);
        let Node::Unrecognized { original } = &out[0] else {
            panic!("expected unrecognized, got {:?}", out[0]);
        };
        assert_eq!(original.tag, "span");
        assert_eq!(original.attr("class"), Some("x"));
        // Kept verbatim, the bold child is not rewritten.
        assert!(original.children[1].is_element());
    }

    #[test]
    fn test_unrecognized_inside_paragraph() {
        let out = run("<p>x <sup>2</sup></p>");
        let Node::Paragraph { children } = &out[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(children[1].kind(), "unrecognized");
    }

    #[test]
    fn test_math_before_tags() {
        let markup = r#"<p><span typeof="mw:Extension/math" data-mw='{"body":{"extsrc":"a+b"}}'>a+b</span></p>"#;
        assert_eq!(
            run(markup),
            vec![Node::Paragraph {
                children: vec![Node::InlineMath {
                    formula: "a+b".into()
                }]
            }]
        );
    }

    #[test]
    fn test_template_params_normalized() {
        let mut params = Params::new();
        params.insert("title".into(), ParamValue::Text("Menge".into()));
        params.insert(
            "definition".into(),
            ParamValue::Content(vec![Element::new("p")
                .with_child(Element::new("b").with_child(Node::text("x")))
                .into()]),
        );
        let nodes = vec![Node::Template {
            name: "Definition".into(),
            params,
        }];

        let out = normalize(&nodes).unwrap();
        let Node::Template { params, .. } = &out[0] else {
            panic!("expected template");
        };
        assert_eq!(params["title"].as_text(), Some("Menge"));
        assert_eq!(
            params["definition"].as_content().unwrap(),
            &[Node::Paragraph {
                children: vec![Node::InlineStyle {
                    kind: StyleKind::Bold,
                    children: vec![Node::text("x")],
                }]
            }]
        );
    }

    #[test]
    fn test_normalize_twice_is_stable() {
        let once = run("<h2>Titel</h2><p>a <span>b</span></p><table><tbody><tr><td>1</td></tr></tbody></table>");
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
