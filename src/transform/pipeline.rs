//! Ordered stages from markup to a finished forest.

use super::Transformation;
use crate::error::Result;
use crate::model::Node;

type ParseFn<'a> = Box<dyn Fn(&str) -> Result<Vec<Node>> + 'a>;
type StageFn<'a> = Box<dyn Fn(Vec<Node>) -> Result<Vec<Node>> + 'a>;

/// A parse action followed by stages run in strict sequence.
///
/// Each stage consumes the complete output of the one before it. The list
/// is built explicitly by the caller; nothing is discovered implicitly.
///
/// # Example
///
/// ```
/// use wiki2doc::parser::HtmlParser;
/// use wiki2doc::transform::{Identity, Pipeline};
///
/// let parser = HtmlParser::new();
/// let pipeline = Pipeline::new(|markup| parser.parse(markup))
///     .transformation("identity", Identity);
///
/// let nodes = pipeline.run("<p>x</p>").unwrap();
/// assert_eq!(nodes.len(), 1);
/// ```
pub struct Pipeline<'a> {
    parse: ParseFn<'a>,
    stages: Vec<(String, StageFn<'a>)>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline starting with the given parse action.
    pub fn new(parse: impl Fn(&str) -> Result<Vec<Node>> + 'a) -> Self {
        Self {
            parse: Box::new(parse),
            stages: Vec::new(),
        }
    }

    /// Append a stage working on the whole forest.
    pub fn stage(
        mut self,
        name: impl Into<String>,
        stage: impl Fn(Vec<Node>) -> Result<Vec<Node>> + 'a,
    ) -> Self {
        self.stages.push((name.into(), Box::new(stage)));
        self
    }

    /// Append a transformation as a stage.
    pub fn transformation<T: Transformation + 'a>(self, name: impl Into<String>, t: T) -> Self {
        self.stage(name, move |nodes| t.transform_nodes(&nodes))
    }

    /// Names of the stages after parsing, in order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Parse markup and run every stage on the result.
    pub fn run(&self, markup: &str) -> Result<Vec<Node>> {
        let nodes = (self.parse)(markup)?;
        log::debug!("parsed {} root nodes", nodes.len());
        self.run_nodes(nodes)
    }

    /// Run every stage on an already parsed forest.
    pub fn run_nodes(&self, nodes: Vec<Node>) -> Result<Vec<Node>> {
        self.stages.iter().try_fold(nodes, |nodes, (name, stage)| {
            log::debug!("running stage `{}` on {} root nodes", name, nodes.len());
            stage(nodes)
        })
    }
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
