//! Template deinclusion.
//!
//! The renderer expands every template call into ordinary HTML and marks
//! the result with `typeof="mw:Transclusion"` plus a `data-mw` blob naming
//! the template and its arguments. Deinclusion undoes the expansion: the
//! marked element becomes a [`Node::Template`] carrying the original call.
//!
//! Parameters listed as content (see [`DeincludeOptions`]) are parsed and
//! deincluded themselves, so templates nested inside a definition box end
//! up as nested `Template` nodes.

mod options;

pub use options::{
    DeincludeOptions, ParamMarkup, DEFAULT_CONTENT_PARAMS, DEFAULT_MAX_DEPTH,
    DEFAULT_NAMESPACE_PREFIX,
};

use crate::api::MediaWikiApi;
use crate::error::{Error, Result};
use crate::metadata::{self, ParamText, DATA_MW, TRANSCLUSION_TYPE};
use crate::model::{Element, Node, ParamValue, Params};
use crate::parser::HtmlParser;
use crate::transform::{Pipeline, Rewrite, Transformation};

fn is_transclusion(el: &Element) -> bool {
    el.has_type(TRANSCLUSION_TYPE)
}

/// Rewrites transclusion markers into template nodes.
#[derive(Clone, Copy)]
pub struct Deincluder<'a> {
    options: &'a DeincludeOptions,
    parser: &'a HtmlParser,
    api: Option<&'a dyn MediaWikiApi>,
    title: &'a str,
    depth: usize,
}

impl<'a> Deincluder<'a> {
    /// Create a deincluder for top-level article markup.
    pub fn new(options: &'a DeincludeOptions, parser: &'a HtmlParser) -> Self {
        Self {
            options,
            parser,
            api: None,
            title: "",
            depth: 0,
        }
    }

    /// Attach the wiki used to render wikitext parameters.
    pub fn with_api(mut self, api: &'a dyn MediaWikiApi, title: &'a str) -> Self {
        self.api = Some(api);
        self.title = title;
        self
    }

    /// Current parameter nesting depth (0 for the article itself).
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn nested(&self) -> Result<Self> {
        if self.depth >= self.options.max_depth {
            return Err(Error::RecursionLimit(self.options.max_depth));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    fn render(&self, wikitext: &str) -> Result<String> {
        let api = self.api.ok_or_else(|| {
            Error::Api("rendering wikitext parameters requires a wiki API".into())
        })?;
        api.convert_text_to_html(self.title, wikitext)
    }

    /// Plain parameters keep their wiki markup. Content parameters are read
    /// from the field matching [`ParamMarkup`], falling back to the other.
    fn expand_param(&self, template: &str, key: &str, text: ParamText) -> Result<ParamValue> {
        if !self.options.is_content_param(template, key) {
            return Ok(ParamValue::Text(text.into_wikitext()));
        }

        let nested = self.nested()?;
        let markup = match self.options.param_markup {
            ParamMarkup::Html => text.into_html(),
            ParamMarkup::Wikitext => match text.wikitext {
                Some(wikitext) => self.render(&wikitext)?,
                None => text.html.unwrap_or_default(),
            },
        };

        log::debug!(
            "expanding parameter `{}` of `{}` at depth {}",
            key,
            template,
            nested.depth
        );

        let nodes = Pipeline::new(|markup| self.parser.parse(markup))
            .transformation("deinclude", nested)
            .run(&markup)?;
        Ok(ParamValue::Content(nodes))
    }

    fn deinclude(&self, el: &Element) -> Result<Node> {
        let data = el.attr(DATA_MW).ok_or_else(|| {
            Error::MalformedMetadata(format!("<{}> transclusion without {}", el.tag, DATA_MW))
        })?;
        let call = metadata::decode_transclusion(data)?;
        let name = self.options.template_name(&call.name).to_string();

        let params = call
            .params
            .into_iter()
            .map(|(key, text)| {
                let value = self.expand_param(&name, &key, text)?;
                Ok((key, value))
            })
            .collect::<Result<Params>>()?;

        Ok(Node::Template { name, params })
    }
}

impl std::fmt::Debug for Deincluder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deincluder")
            .field("title", &self.title)
            .field("depth", &self.depth)
            .field("has_api", &self.api.is_some())
            .finish()
    }
}

impl Transformation for Deincluder<'_> {
    fn rewrite(&self, node: &Node) -> Result<Rewrite> {
        match node.as_element() {
            Some(el) if is_transclusion(el) => Ok(Rewrite::Rewritten(self.deinclude(el)?)),
            _ => Ok(Rewrite::PassThrough),
        }
    }

    /// Template output spanning several sibling elements shares one `about`
    /// id; only the first sibling carries the call, the rest are dropped.
    fn transform_nodes(&self, nodes: &[Node]) -> Result<Vec<Node>> {
        let mut out = Vec::with_capacity(nodes.len());
        let mut covered: Option<&str> = None;

        for node in nodes {
            let el = node.as_element();
            let about = el.and_then(|el| el.attr("about"));
            if covered.is_some() && about == covered {
                continue;
            }

            covered = match el {
                Some(el) if is_transclusion(el) => about,
                _ => None,
            };
            out.push(self.transform_node(node)?);
        }

        Ok(out)
    }
}
