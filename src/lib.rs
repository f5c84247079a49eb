//! # wiki2doc
//!
//! Convert rendered MediaWiki articles into a structured document tree.
//!
//! The wiki renderer expands templates, formulas and images into plain HTML
//! and annotates the result with machine-readable metadata. This library
//! reads that HTML back into a tree and undoes the expansion: template calls
//! become [`Node::Template`] nodes carrying their arguments, and the markup
//! around them becomes paragraphs, lists, tables, images and formulas.
//!
//! ## Quick Start
//!
//! ```
//! use wiki2doc::{render, Node};
//!
//! fn main() -> wiki2doc::Result<()> {
//!     let doc = wiki2doc::convert_html("Folgen", "<ul><li>A</li><li>B</li></ul>")?;
//!
//!     assert_eq!(
//!         doc.content,
//!         vec![Node::List {
//!             ordered: false,
//!             children: vec![vec![Node::text("A")], vec![Node::text("B")]],
//!         }]
//!     );
//!
//!     let json = render::to_json(&doc, render::JsonFormat::Compact)?;
//!     assert!(json.starts_with(r#"{"title":"Folgen""#));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: strict markup parser, see [`parser`]
//! - **Deinclude**: transclusions back into template calls, see [`deinclude`]
//! - **Normalize**: raw elements into semantic nodes, see [`normalize`]
//! - **Clean up**: page headers and footers removed, see [`cleanup`]
//!
//! Every stage is a [`transform::Transformation`]; [`convert::Converter`]
//! wires them together in that order.

pub mod api;
pub mod cleanup;
pub mod convert;
pub mod deinclude;
pub mod error;
pub mod metadata;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use api::{MediaWikiApi, StaticApi};
pub use convert::{ConvertOptions, Converter};
pub use deinclude::{DeincludeOptions, Deincluder, ParamMarkup};
pub use error::{Error, Result};
pub use model::{Attributes, Document, Element, Node, ParamValue, Params, StyleKind};
pub use parser::{to_html, HtmlParser, ParseOptions};
pub use render::JsonFormat;
pub use transform::{
    DispatchTable, Pipeline, Prune, Rewrite, RewriteChain, RewriteRule, Transformation,
};

/// Parse markup into a node forest without any rewriting.
///
/// # Example
///
/// ```
/// let nodes = wiki2doc::parse_html("<p>a <b>b</b></p>").unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert!(nodes[0].is_element());
/// ```
pub fn parse_html(markup: &str) -> Result<Vec<Node>> {
    HtmlParser::new().parse(markup)
}

/// Convert rendered HTML of an article with default options.
///
/// # Example
///
/// ```
/// let doc = wiki2doc::convert_html("Analysis", "<h2>Folgen</h2>").unwrap();
/// assert_eq!(doc.plain_text(), "Folgen");
/// ```
pub fn convert_html(title: &str, html: &str) -> Result<Document> {
    convert_html_with_options(title, html, ConvertOptions::default())
}

/// Convert rendered HTML of an article with custom options.
pub fn convert_html_with_options(
    title: &str,
    html: &str,
    options: ConvertOptions,
) -> Result<Document> {
    Converter::new(StaticApi::new(), options).convert_html(title, html)
}

/// Convert rendered HTML of an article straight to JSON.
pub fn to_json(title: &str, html: &str, format: JsonFormat) -> Result<String> {
    let doc = convert_html(title, html)?;
    render::to_json(&doc, format)
}

/// Extract plain text from rendered HTML of an article.
pub fn extract_text(title: &str, html: &str) -> Result<String> {
    Ok(convert_html(title, html)?.plain_text())
}
