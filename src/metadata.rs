//! Embedded renderer metadata.
//!
//! The HTML renderer attaches a JSON blob in the `data-mw` attribute to
//! every node produced by a template or an extension tag. This module
//! decodes the parts the pipeline needs.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// `typeof` token of a template transclusion.
pub const TRANSCLUSION_TYPE: &str = "mw:Transclusion";

/// `typeof` token of a `<math>` extension tag.
pub const MATH_TYPE: &str = "mw:Extension/math";

/// Attribute holding the metadata blob.
pub const DATA_MW: &str = "data-mw";

/// A decoded template invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCall {
    /// Target name as written, e.g. `Vorlage:Definition`
    pub name: String,

    /// Parameter values, in invocation order
    pub params: IndexMap<String, ParamText>,
}

/// One template argument as the renderer reports it.
///
/// At least one of the two fields is set on every decoded parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ParamText {
    /// Wiki markup as written in the call
    #[serde(rename = "wt")]
    pub wikitext: Option<String>,

    /// Rendered HTML of the argument
    pub html: Option<String>,
}

impl ParamText {
    /// Parameter given as wiki markup.
    pub fn from_wikitext(text: impl Into<String>) -> Self {
        Self {
            wikitext: Some(text.into()),
            html: None,
        }
    }

    /// Parameter given as rendered HTML.
    pub fn from_html(text: impl Into<String>) -> Self {
        Self {
            wikitext: None,
            html: Some(text.into()),
        }
    }

    /// The wiki markup, or the rendered HTML if that is all there is.
    pub fn into_wikitext(self) -> String {
        self.wikitext.or(self.html).unwrap_or_default()
    }

    /// The rendered HTML, or the wiki markup if that is all there is.
    pub fn into_html(self) -> String {
        self.html.or(self.wikitext).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct TransclusionData {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Part {
    Template { template: TemplatePart },
    Other(serde_json::Value),
}

#[derive(Deserialize)]
struct TemplatePart {
    target: Target,
    #[serde(default)]
    params: IndexMap<String, ParamText>,
}

#[derive(Deserialize)]
struct Target {
    wt: Option<String>,
}

#[derive(Deserialize)]
struct ExtensionData {
    body: Option<ExtensionBody>,
}

#[derive(Deserialize)]
struct ExtensionBody {
    extsrc: Option<String>,
}

fn parse_json<'de, T: Deserialize<'de>>(data: &'de str, what: &str) -> Result<T> {
    serde_json::from_str(data)
        .map_err(|e| Error::MalformedMetadata(format!("undecodable {} data: {}", what, e)))
}

/// Decode the first template invocation of a transclusion blob.
///
/// Literal text parts between templates are ignored. Each parameter must
/// carry its wikitext (`wt`), its rendered HTML (`html`), or both; both are
/// kept so the caller can pick the one it reads.
pub fn decode_transclusion(data: &str) -> Result<TemplateCall> {
    let decoded: TransclusionData = parse_json(data, "transclusion")?;

    let mut templates = decoded.parts.into_iter().filter_map(|part| match part {
        Part::Template { template } => Some(template),
        Part::Other(_) => None,
    });
    let template = templates
        .next()
        .ok_or_else(|| Error::MalformedMetadata("transclusion without template part".into()))?;

    let skipped = templates.count();
    if skipped > 0 {
        log::warn!("transclusion of several templates, ignoring {} after the first", skipped);
    }

    let name = template
        .target
        .wt
        .map(|wt| wt.trim().to_string())
        .filter(|wt| !wt.is_empty())
        .ok_or_else(|| Error::MalformedMetadata("template without target name".into()))?;

    let params = template
        .params
        .into_iter()
        .map(|(key, text)| {
            if text.wikitext.is_none() && text.html.is_none() {
                return Err(Error::MalformedMetadata(format!(
                    "parameter `{}` of template `{}` has no value",
                    key, name
                )));
            }
            Ok((key, text))
        })
        .collect::<Result<_>>()?;

    Ok(TemplateCall { name, params })
}

/// Decode the source text of an extension tag, e.g. the TeX of a formula.
pub fn decode_extension_source(data: &str) -> Result<String> {
    let decoded: ExtensionData = parse_json(data, "extension")?;
    decoded
        .body
        .and_then(|body| body.extsrc)
        .ok_or_else(|| Error::MalformedMetadata("extension without source text".into()))
}
