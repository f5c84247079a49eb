//! Conversion options.

use crate::cleanup::DEFAULT_RESERVED_PREFIX;
use crate::deinclude::DeincludeOptions;
use crate::parser::ParseOptions;

/// Options for converting an article.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Markup parsing options
    pub parse: ParseOptions,

    /// Template deinclusion options
    pub deinclude: DeincludeOptions,

    /// Name prefix of header and footer templates
    pub reserved_prefix: String,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set deinclusion options.
    pub fn with_deinclude_options(mut self, options: DeincludeOptions) -> Self {
        self.deinclude = options;
        self
    }

    /// Set the name prefix of header and footer templates.
    pub fn with_reserved_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reserved_prefix = prefix.into();
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            deinclude: DeincludeOptions::default(),
            reserved_prefix: DEFAULT_RESERVED_PREFIX.to_string(),
        }
    }
}
