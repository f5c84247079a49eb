//! Rewrites selected by a node's discriminant.

use super::{Rewrite, RewriteRule, Transformation};
use crate::error::{Error, Result};
use crate::model::Node;
use std::collections::HashMap;

/// Handler registered for one discriminant.
///
/// A handler must check the node's shape before rewriting it and pass
/// through anything else, see [`DispatchTable`].
pub type Handler = fn(&dyn Transformation, &Node) -> Result<Rewrite>;

/// Table from discriminant to handler.
///
/// The discriminant is [`Node::discriminant`]: the tag name of a raw element,
/// or the variant name of a semantic node. Nodes without a registered
/// handler pass through.
///
/// Tag names and variant names share one namespace, so a handler for
/// `table` also sees `Node::Table`, and likewise `header` and `template`.
/// Handlers for tags match on [`Node::as_element`] and return
/// [`Rewrite::PassThrough`] for every other node.
#[derive(Clone)]
pub struct DispatchTable {
    name: &'static str,
    handlers: HashMap<&'static str, Handler>,
}

impl DispatchTable {
    /// Create a new empty table.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handlers: HashMap::new(),
        }
    }

    /// Register a handler, replacing any earlier one for the discriminant.
    pub fn with(mut self, discriminant: &'static str, handler: Handler) -> Self {
        self.handlers.insert(discriminant, handler);
        self
    }

    /// Register one handler for several discriminants.
    pub fn with_all(mut self, discriminants: &[&'static str], handler: Handler) -> Self {
        for &discriminant in discriminants {
            self.handlers.insert(discriminant, handler);
        }
        self
    }

    /// Union of two tables.
    ///
    /// Fails if both tables claim the same discriminant, since the result
    /// would then depend on the order the tables were applied in.
    pub fn merge(mut self, other: DispatchTable) -> Result<Self> {
        for (discriminant, handler) in other.handlers {
            if self.handlers.contains_key(discriminant) {
                return Err(Error::DuplicateHandler(discriminant.to_string()));
            }
            self.handlers.insert(discriminant, handler);
        }
        Ok(self)
    }

    /// Check if a handler is registered for the discriminant.
    pub fn handles(&self, discriminant: &str) -> bool {
        self.handlers.contains_key(discriminant)
    }

    /// Registered discriminants, sorted.
    pub fn discriminants(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.handlers.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Look up and run the handler for a node.
    pub fn dispatch(&self, t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
        match self.handlers.get(node.discriminant()) {
            Some(handler) => handler(t, node),
            None => Ok(Rewrite::PassThrough),
        }
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("name", &self.name)
            .field("discriminants", &self.discriminants())
            .finish()
    }
}

impl Transformation for DispatchTable {
    fn rewrite(&self, node: &Node) -> Result<Rewrite> {
        self.dispatch(self, node)
    }
}

impl RewriteRule for DispatchTable {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
        self.dispatch(t, node)
    }
}
