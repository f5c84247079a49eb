//! Embedded images.

use crate::error::{Error, Result};
use crate::model::{Element, Node};
use crate::transform::{DispatchTable, Rewrite, Transformation};
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;

/// Relative link prefix and file namespace of an image resource,
/// e.g. `./Datei:` in `./Datei:Graph_1.svg`.
static RESOURCE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\./)?(?:[^:/]+:)?").expect("valid resource pattern"));

const IMAGE_TYPES: [&str; 2] = ["mw:Image", "mw:File"];

/// Handler for `figure`.
pub fn table() -> DispatchTable {
    DispatchTable::new("figures").with("figure", figure)
}

/// Display name of an image resource: namespace dropped, URL-decoded,
/// underscores shown as spaces.
pub fn resource_name(resource: &str) -> String {
    let path = RESOURCE_PREFIX.replace(resource, "");
    percent_decode_str(&path)
        .decode_utf8_lossy()
        .replace('_', " ")
}

fn image_type(el: &Element) -> Option<&str> {
    el.type_tokens()
        .find(|token| IMAGE_TYPES.iter().any(|prefix| token.starts_with(prefix)))
}

fn required<'a>(el: &'a Element, key: &str) -> Result<&'a str> {
    el.attr(key)
        .ok_or_else(|| Error::MalformedMetadata(format!("image without `{}`", key)))
}

/// A figure without an image marker passes through.
fn figure(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some((el, kind)) = node
        .as_element()
        .and_then(|el| image_type(el).map(|kind| (el, kind)))
    else {
        return Ok(Rewrite::PassThrough);
    };

    let img = el
        .find_descendant("img")
        .ok_or_else(|| Error::MalformedMetadata("figure without <img>".into()))?;

    let caption = match el.child_elements().find(|child| child.tag == "figcaption") {
        Some(caption) => t.transform_nodes(&caption.children)?,
        None => Vec::new(),
    };

    Ok(Rewrite::Rewritten(Node::Image {
        name: resource_name(required(img, "resource")?),
        url: required(img, "src")?.to_string(),
        thumbnail: kind.ends_with("/Thumb"),
        caption,
    }))
}
