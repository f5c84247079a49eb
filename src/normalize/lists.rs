//! Ordered and unordered lists.

use crate::error::Result;
use crate::model::Node;
use crate::transform::{DispatchTable, Rewrite, Transformation};

/// Handlers for `ul` and `ol`.
pub fn table() -> DispatchTable {
    DispatchTable::new("lists").with_all(&["ul", "ol"], list)
}

/// One node group per item; the `li` wrapper itself is dropped.
///
/// Any other child, such as a template that rendered a whole item or stray
/// text, becomes a group of its own.
fn list(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some(el) = node.as_element() else {
        return Ok(Rewrite::PassThrough);
    };

    let children = el
        .children
        .iter()
        .map(|child| match child.as_element() {
            Some(item) if item.tag == "li" => t.transform_nodes(&item.children),
            _ => Ok(vec![t.transform_node(child)?]),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Rewrite::Rewritten(Node::List {
        ordered: el.tag == "ol",
        children,
    }))
}
