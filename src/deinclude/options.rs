//! Deinclusion options and configuration.

use std::collections::{HashMap, HashSet};

/// Namespace prefix of templates on the German Wikibooks.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "Vorlage:";

/// Default limit on nested parameter expansion.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Template parameters whose value is article content rather than a plain
/// string, as (template, parameter) pairs.
pub const DEFAULT_CONTENT_PARAMS: &[(&str, &str)] = &[
    ("Aufgabe", "aufgabe"),
    ("Aufgabe", "erklärung"),
    ("Aufgabe", "lösung"),
    ("Aufgabe", "beweis"),
    ("Beispiel", "beispiel"),
    ("Definition", "definition"),
    ("Frage", "frage"),
    ("Frage", "antwort"),
    ("Hinweis", "hinweis"),
    ("Lösungsweg", "lösungsweg"),
    ("Satz", "satz"),
    ("Satz", "erklärung"),
    ("Satz", "beweis"),
    ("Satz", "beweisübersicht"),
    ("Warnung", "warnung"),
];

/// How the text of a content parameter is turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamMarkup {
    /// The value is parsed directly as markup
    #[default]
    Html,

    /// The value is wiki markup and is rendered through the wiki API first
    Wikitext,
}

/// Options for template deinclusion.
#[derive(Debug, Clone)]
pub struct DeincludeOptions {
    /// Prefix stripped from template names
    pub namespace_prefix: String,

    /// Whitelisted parameters holding content, keyed by template name
    pub content_params: HashMap<String, HashSet<String>>,

    /// Maximum nesting of content parameters
    pub max_depth: usize,

    /// How content parameter text is interpreted
    pub param_markup: ParamMarkup,
}

impl DeincludeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace prefix stripped from template names.
    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Whitelist a content parameter.
    pub fn with_content_param(
        mut self,
        template: impl Into<String>,
        param: impl Into<String>,
    ) -> Self {
        self.content_params
            .entry(template.into())
            .or_default()
            .insert(param.into());
        self
    }

    /// Remove every content parameter from the whitelist.
    pub fn without_content_params(mut self) -> Self {
        self.content_params.clear();
        self
    }

    /// Set the maximum nesting of content parameters.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set how content parameter text is interpreted.
    pub fn with_param_markup(mut self, markup: ParamMarkup) -> Self {
        self.param_markup = markup;
        self
    }

    /// Check if a parameter of a template holds content.
    pub fn is_content_param(&self, template: &str, param: &str) -> bool {
        self.content_params
            .get(template)
            .is_some_and(|params| params.contains(param))
    }

    /// Strip the namespace prefix from a template name.
    pub fn template_name<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.namespace_prefix.as_str())
            .unwrap_or(name)
    }
}

impl Default for DeincludeOptions {
    fn default() -> Self {
        let options = Self {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            content_params: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            param_markup: ParamMarkup::Html,
        };
        DEFAULT_CONTENT_PARAMS
            .iter()
            .fold(options, |options, &(template, param)| {
                options.with_content_param(template, param)
            })
    }
}
