//! Serialization of the generic tree back to markup.

use crate::error::{Error, Result};
use crate::model::{Element, Node};
use quick_xml::escape::escape;

/// Render raw `Element`/`Text` nodes as markup.
///
/// Childless elements are written self-closing, so parsing the output yields
/// the same tree again. Semantic nodes have no markup form and are rejected.
pub fn to_html(nodes: &[Node]) -> Result<String> {
    let mut out = String::new();
    write_nodes(&mut out, nodes)?;
    Ok(out)
}

fn write_nodes(out: &mut String, nodes: &[Node]) -> Result<()> {
    for node in nodes {
        match node {
            Node::Element(el) => write_element(out, el)?,
            Node::Text { data } => out.push_str(&escape(data.as_str())),
            other => {
                return Err(Error::Render(format!(
                    "{} node has no markup form",
                    other.kind()
                )))
            }
        }
    }
    Ok(())
}

fn write_element(out: &mut String, el: &Element) -> Result<()> {
    out.push('<');
    out.push_str(&el.tag);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }

    if el.children.is_empty() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    write_nodes(out, &el.children)?;
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::HtmlParser;

    #[test]
    fn test_to_html() {
        let nodes = vec![Node::Element(
            Element::new("p")
                .with_attr("class", "a\"b")
                .with_child(Node::text("x < y"))
                .with_child(Element::new("br")),
        )];
        assert_eq!(
            to_html(&nodes).unwrap(),
            r#"<p class="a&quot;b">x &lt; y<br/></p>"#
        );
    }

    #[test]
    fn test_round_trip() {
        let markup = r#"<div id="a" typeof="mw:Transclusion"><p>One <i>two</i></p><ul><li>A</li><li>B</li></ul><img src="x.png"></div><p>Tail &amp; more</p>"#;
        let parser = HtmlParser::new();
        let first = parser.parse(markup).unwrap();
        let second = parser.parse(&to_html(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_semantic_node_rejected() {
        let nodes = vec![Node::Paragraph { children: vec![] }];
        assert!(matches!(to_html(&nodes), Err(Error::Render(_))));
    }
}
