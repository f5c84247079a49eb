//! Tables.

use crate::error::Result;
use crate::model::Node;
use crate::transform::{DispatchTable, Rewrite, Transformation};

/// Handler for `table`.
pub fn table() -> DispatchTable {
    DispatchTable::new("tables").with("table", rows)
}

/// A leading row group (`tbody`) is replaced by its rows, so both markup
/// variants give the same table. Later groups, `thead` and `tfoot` are kept
/// as they are.
fn rows(t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
    let Some(el) = node.as_element() else {
        return Ok(Rewrite::PassThrough);
    };

    let children = match el.children.split_first() {
        Some((first, rest)) => match first.as_element() {
            Some(group) if group.tag == "tbody" => {
                let mut children = t.transform_nodes(&group.children)?;
                children.extend(t.transform_nodes(rest)?);
                children
            }
            _ => t.transform_nodes(&el.children)?,
        },
        None => Vec::new(),
    };

    Ok(Rewrite::Rewritten(Node::Table { children }))
}
