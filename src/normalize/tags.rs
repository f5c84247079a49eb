//! Direct tag-to-type mapping.

use crate::error::Result;
use crate::model::{Node, StyleKind};
use crate::transform::{DispatchTable, Rewrite, Transformation};

/// Handlers for paragraphs, inline styles and headings.
pub fn table() -> DispatchTable {
    DispatchTable::new("tags")
        .with("p", paragraph)
        .with_all(&["i", "b", "th", "tr", "td", "dfn"], inline_style)
        .with_all(&["h1", "h2", "h3", "h4"], header)
}

fn paragraph(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some(el) = node.as_element() else {
        return Ok(Rewrite::PassThrough);
    };
    Ok(Rewrite::Rewritten(Node::Paragraph {
        children: t.transform_nodes(&el.children)?,
    }))
}

fn inline_style(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some((el, kind)) = node
        .as_element()
        .and_then(|el| StyleKind::from_tag(&el.tag).map(|kind| (el, kind)))
    else {
        return Ok(Rewrite::PassThrough);
    };
    Ok(Rewrite::Rewritten(Node::InlineStyle {
        kind,
        children: t.transform_nodes(&el.children)?,
    }))
}

fn header(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some(el) = node.as_element() else {
        return Ok(Rewrite::PassThrough);
    };
    let depth = match el.tag.as_str() {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        _ => return Ok(Rewrite::PassThrough),
    };
    Ok(Rewrite::Rewritten(Node::Header {
        depth,
        children: t.transform_nodes(&el.children)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn test_paragraph_with_styles() {
        let node: Node = Element::new("p")
            .with_child(Node::text("Eine"))
            .with_child(Element::new("dfn").with_child(Node::text("Folge")))
            .with_child(Element::new("i").with_child(Node::text("ist")))
            .into();

        let out = table().transform_node(&node).unwrap();
        assert_eq!(
            out,
            Node::Paragraph {
                children: vec![
                    Node::text("Eine"),
                    Node::InlineStyle {
                        kind: StyleKind::Dfn,
                        children: vec![Node::text("Folge")],
                    },
                    Node::InlineStyle {
                        kind: StyleKind::Italic,
                        children: vec![Node::text("ist")],
                    },
                ]
            }
        );
    }

    #[test]
    fn test_header_depths() {
        let t = table();
        for (tag, depth) in [("h1", 1), ("h2", 2), ("h3", 3), ("h4", 4)] {
            let node: Node = Element::new(tag).with_child(Node::text("x")).into();
            let Node::Header { depth: got, .. } = t.transform_node(&node).unwrap() else {
                panic!("expected header for {}", tag);
            };
            assert_eq!(got, depth);
        }

        let node: Node = Element::new("h5").into();
        assert!(t.rewrite(&node).unwrap().is_pass_through());
    }

    #[test]
    fn test_table_cells() {
        let node: Node = Element::new("tr")
            .with_child(Element::new("th").with_child(Node::text("n")))
            .with_child(Element::new("td").with_child(Node::text("1")))
            .into();
        let Node::InlineStyle { kind, children } = table().transform_node(&node).unwrap() else {
            panic!("expected row");
        };
        assert_eq!(kind, StyleKind::TableRow);
        assert_eq!(children[0].kind(), "inline_style");
        assert_eq!(children.len(), 2);
    }
}
