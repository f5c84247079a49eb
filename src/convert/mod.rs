//! Article conversion.
//!
//! A [`Converter`] runs the complete pipeline on one article: render the
//! wiki markup through the [`MediaWikiApi`], parse the HTML, deinclude
//! templates, normalize structure, and drop page headers and footers.
//!
//! # Example
//!
//! ```
//! use wiki2doc::api::StaticApi;
//! use wiki2doc::convert::{ConvertOptions, Converter};
//! use wiki2doc::model::Node;
//!
//! fn main() -> wiki2doc::Result<()> {
//!     let api = StaticApi::new().with_page("Folgen", "<h2>Folgen</h2><p>Eine Folge ist …</p>");
//!     let converter = Converter::new(api, ConvertOptions::default());
//!
//!     let doc = converter.convert_article("Folgen")?;
//!     assert!(matches!(doc.content[0], Node::Header { depth: 2, .. }));
//!     Ok(())
//! }
//! ```

mod options;

pub use options::ConvertOptions;

use crate::api::MediaWikiApi;
use crate::cleanup;
use crate::deinclude::Deincluder;
use crate::error::Result;
use crate::model::Document;
use crate::normalize;
use crate::parser::HtmlParser;
use crate::transform::Pipeline;

/// Stage names, in the order they run after parsing.
pub const STAGES: [&str; 3] = ["deinclude", "normalize", "remove headers and footers"];

/// Converts articles of one wiki into documents.
#[derive(Debug)]
pub struct Converter<A: MediaWikiApi> {
    api: A,
    options: ConvertOptions,
    parser: HtmlParser,
}

impl<A: MediaWikiApi> Converter<A> {
    /// Create a converter for the given wiki.
    pub fn new(api: A, options: ConvertOptions) -> Self {
        let parser = HtmlParser::with_options(options.parse.clone());
        Self {
            api,
            options,
            parser,
        }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get the wiki this converter reads from.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch an article from the wiki and convert it.
    pub fn convert_article(&self, title: &str) -> Result<Document> {
        let markup = self.api.get_content(title)?;
        self.convert(title, &markup)
    }

    /// Convert the wiki markup of an article.
    pub fn convert(&self, title: &str, markup: &str) -> Result<Document> {
        log::debug!("rendering `{}` ({} bytes of markup)", title, markup.len());
        let html = self.api.convert_text_to_html(title, markup)?;
        self.convert_html(title, &html)
    }

    /// Convert already rendered HTML of an article.
    pub fn convert_html(&self, title: &str, html: &str) -> Result<Document> {
        let content = self.pipeline(title)?.run(html)?;
        log::debug!("converted `{}` into {} top-level nodes", title, content.len());
        Ok(Document::new(title, content))
    }

    fn pipeline<'a>(&'a self, title: &'a str) -> Result<Pipeline<'a>> {
        let [deinclude_stage, normalize_stage, prune_stage] = STAGES;

        let deincluder =
            Deincluder::new(&self.options.deinclude, &self.parser).with_api(&self.api, title);

        Ok(Pipeline::new(|markup| self.parser.parse(markup))
            .transformation(deinclude_stage, deincluder)
            .transformation(normalize_stage, normalize::normalizer()?)
            .transformation(
                prune_stage,
                cleanup::header_footer_pruner(&self.options.reserved_prefix),
            ))
    }
}
