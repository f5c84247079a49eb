//! Parsing options and configuration.

/// Default limit on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for parsing markup.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum element nesting depth
    pub max_depth: usize,

    /// Normalize text to Unicode NFC
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum element nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Enable or disable Unicode normalization of text.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Keep text exactly as decoded.
    pub fn raw_text(mut self) -> Self {
        self.normalize_unicode = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            normalize_unicode: true,
        }
    }
}
