//! Inline formulas.

use crate::error::{Error, Result};
use crate::metadata::{self, DATA_MW, MATH_TYPE};
use crate::model::Node;
use crate::transform::{Rewrite, Transformation};

/// Rewrite a `<math>` extension element into an inline formula.
pub fn math(_: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some(el) = node.as_element().filter(|el| el.has_type(MATH_TYPE)) else {
        return Ok(Rewrite::PassThrough);
    };

    let data = el.attr(DATA_MW).ok_or_else(|| {
        Error::MalformedMetadata(format!("<{}> formula without {}", el.tag, DATA_MW))
    })?;
    let formula = metadata::decode_extension_source(data)?;

    Ok(Rewrite::Rewritten(Node::InlineMath { formula }))
}
