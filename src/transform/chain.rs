//! Combining several node-targeted rewrites into one pass.

use super::{Rewrite, Transformation};
use crate::error::Result;
use crate::model::Node;

/// A rewrite that can take part in a [`RewriteChain`].
///
/// `apply` receives the transformation that owns it, so that recursion into
/// children goes through the whole chain rather than through this rule only.
pub trait RewriteRule {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Offer a node to this rule.
    fn apply(&self, t: &dyn Transformation, node: &Node) -> Result<Rewrite>;
}

/// A rule backed by a plain function.
#[derive(Clone, Copy)]
pub struct FnRule {
    name: &'static str,
    apply: fn(&dyn Transformation, &Node) -> Result<Rewrite>,
}

impl FnRule {
    /// Create a rule from a function.
    pub const fn new(
        name: &'static str,
        apply: fn(&dyn Transformation, &Node) -> Result<Rewrite>,
    ) -> Self {
        Self { name, apply }
    }
}

impl std::fmt::Debug for FnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl RewriteRule for FnRule {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
        (self.apply)(t, node)
    }
}

/// Ordered rules acting as a single transformation.
///
/// Rules are asked in order. The first one that does not pass the node
/// through determines the result; if all pass, the default rebuild applies.
#[derive(Default)]
pub struct RewriteChain {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl RewriteChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule to the end of the chain.
    pub fn with_rule<R: RewriteRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Transformation for RewriteChain {
    fn rewrite(&self, node: &Node) -> Result<Rewrite> {
        self.apply(self, node)
    }
}

/// A chain nested inside another chain asks its rules in place.
impl RewriteRule for RewriteChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn apply(&self, t: &dyn Transformation, node: &Node) -> Result<Rewrite> {
        for rule in &self.rules {
            let outcome = rule.apply(t, node)?;
            if !outcome.is_pass_through() {
                return Ok(outcome);
            }
        }
        Ok(Rewrite::PassThrough)
    }
}
