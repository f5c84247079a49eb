//! Deleting nodes and mapping entries.

use super::Transformation;
use crate::error::Result;
use crate::model::{Attributes, Node, ParamValue, Params};

/// Removes matching nodes and mapping keys, recursing into what survives.
///
/// A dropped node takes its whole subtree with it. Keys are checked on
/// attribute maps and template parameters.
pub struct Prune<N, K>
where
    N: Fn(&Node) -> bool,
    K: Fn(&str) -> bool,
{
    drop_node: N,
    drop_key: K,
}

fn keep_key(_: &str) -> bool {
    false
}

impl<N> Prune<N, fn(&str) -> bool>
where
    N: Fn(&Node) -> bool,
{
    /// Prune nodes only; every mapping key is kept.
    pub fn nodes(drop_node: N) -> Self {
        Self {
            drop_node,
            drop_key: keep_key,
        }
    }
}

impl<N, K> Prune<N, K>
where
    N: Fn(&Node) -> bool,
    K: Fn(&str) -> bool,
{
    /// Prune nodes matching `drop_node` and keys matching `drop_key`.
    pub fn new(drop_node: N, drop_key: K) -> Self {
        Self {
            drop_node,
            drop_key,
        }
    }
}

impl<N, K> Transformation for Prune<N, K>
where
    N: Fn(&Node) -> bool,
    K: Fn(&str) -> bool,
{
    fn transform_nodes(&self, nodes: &[Node]) -> Result<Vec<Node>> {
        nodes
            .iter()
            .filter(|node| !(self.drop_node)(*node))
            .map(|node| self.transform_node(node))
            .collect()
    }

    fn transform_attrs(&self, attrs: &Attributes) -> Result<Attributes> {
        attrs
            .iter()
            .filter(|(key, _)| !(self.drop_key)(key.as_str()))
            .map(|(key, value)| Ok((key.clone(), self.transform_text(value)?)))
            .collect()
    }

    fn transform_params(&self, params: &Params) -> Result<Params> {
        params
            .iter()
            .filter(|(key, _)| !(self.drop_key)(key.as_str()))
            .map(|(key, value)| {
                let value = match value {
                    ParamValue::Text(text) => ParamValue::Text(self.transform_text(text)?),
                    ParamValue::Content(nodes) => ParamValue::Content(self.transform_nodes(nodes)?),
                };
                Ok((key.clone(), value))
            })
            .collect()
    }
}
