//! Integration tests for markup parsing.

use wiki2doc::error::Error;
use wiki2doc::model::{Element, Node};
use wiki2doc::parser::{to_html, HtmlParser, ParseOptions};

const DOCUMENTS: &[&str] = &[
    "<p>x</p>",
    r#"<section data-mw-section-id="1"><h2 id="Folgen">Folgen</h2><p>Eine <b>Folge</b> ist <i>eine</i> Abbildung.</p></section>"#,
    r#"<ul><li>A<ul><li>A.1</li></ul></li><li>B</li></ul><ol start="3"><li>C</li></ol>"#,
    r#"<table class="wikitable"><tbody><tr><th>n</th><th>a</th></tr><tr><td>1</td><td>2</td></tr></tbody></table>"#,
    r#"<figure typeof="mw:Image/Thumb"><a href="./Datei:A.png"><img resource="./Datei:A.png" src="//x/A.png" width="220"/></a><figcaption>Bild &amp; Text</figcaption></figure>"#,
    r#"<div typeof="mw:Transclusion" data-mw="{&quot;parts&quot;:[]}"><p>a &lt; b</p></div>"#,
];

fn shape(nodes: &[Node]) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>) {
        match node {
            Node::Element(el) => {
                let attrs: Vec<_> = el.attrs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                out.push(format!("{}{}[{}]", " ".repeat(depth), el.tag, attrs.join(",")));
                for child in &el.children {
                    walk(child, depth + 1, out);
                }
            }
            Node::Text { data } => out.push(format!("{}'{}'", " ".repeat(depth), data)),
            other => out.push(other.kind().to_string()),
        }
    }

    let mut out = Vec::new();
    for node in nodes {
        walk(node, 0, &mut out);
    }
    out
}

#[test]
fn test_round_trip_preserves_shape() {
    let parser = HtmlParser::new();
    for markup in DOCUMENTS {
        let first = parser.parse(markup).unwrap();
        let second = parser.parse(&to_html(&first).unwrap()).unwrap();
        assert_eq!(shape(&first), shape(&second), "round trip of {}", markup);
        assert_eq!(first, second);
    }
}

#[test]
fn test_mismatched_end_tag_fails() {
    let parser = HtmlParser::new();
    for markup in [
        "<p>x</div>",
        "<div><p>x</div></p>",
        "<ul><li>a</ul>",
        "</p>",
        "<p>x</p></p>",
    ] {
        let result = parser.parse(markup);
        assert!(
            matches!(result, Err(Error::MalformedDocument(_))),
            "{} parsed as {:?}",
            markup,
            result
        );
    }
}

#[test]
fn test_text_outside_elements_fails() {
    let parser = HtmlParser::new();
    assert!(matches!(
        parser.parse("lead <p>x</p>"),
        Err(Error::MalformedDocument(_))
    ));
    // Whitespace between roots is fine.
    assert_eq!(parser.parse("<p>a</p>\n  <p>b</p>\n").unwrap().len(), 2);
}

#[test]
fn test_attribute_order_and_entities() {
    let nodes = HtmlParser::new()
        .parse(r#"<a title="x &amp; y" href="./Folge" rel="mw:WikiLink">Folge&nbsp;1</a>"#)
        .unwrap();
    let a = nodes[0].as_element().unwrap();
    let keys: Vec<_> = a.attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "href", "rel"]);
    assert_eq!(a.attr("title"), Some("x & y"));
    assert_eq!(a.children, vec![Node::text("Folge\u{a0}1")]);
}

#[test]
fn test_depth_limit() {
    let markup = "<div>".repeat(10) + &"</div>".repeat(10);
    let shallow = HtmlParser::with_options(ParseOptions::new().with_max_depth(5));
    assert!(matches!(
        shallow.parse(&markup),
        Err(Error::RecursionLimit(5))
    ));
    assert!(HtmlParser::new().parse(&markup).is_ok());
}

#[test]
fn test_semantic_nodes_not_serializable() {
    let nodes = vec![
        Node::Element(Element::new("p")),
        Node::Paragraph { children: vec![] },
    ];
    assert!(matches!(to_html(&nodes), Err(Error::Render(_))));
}
