//! Access to a MediaWiki project.
//!
//! The conversion core never talks to the network itself. Everything it
//! needs from the wiki goes through [`MediaWikiApi`], so transport,
//! retries and caching stay with the implementor.
//!
//! # Example
//!
//! ```
//! use wiki2doc::api::{MediaWikiApi, StaticApi};
//!
//! let api = StaticApi::new().with_page("Analysis", "<p>Folgen</p>");
//! assert_eq!(api.get_content("Analysis").unwrap(), "<p>Folgen</p>");
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Interface for accessing content of a MediaWiki project.
pub trait MediaWikiApi {
    /// Get the raw wiki markup of the article with the given title.
    fn get_content(&self, title: &str) -> Result<String>;

    /// Render wiki markup to HTML.
    ///
    /// `title` is the article the text belongs to; the renderer resolves
    /// relative links against it.
    fn convert_text_to_html(&self, title: &str, text: &str) -> Result<String>;
}

impl<A: MediaWikiApi + ?Sized> MediaWikiApi for &A {
    fn get_content(&self, title: &str) -> Result<String> {
        (**self).get_content(title)
    }

    fn convert_text_to_html(&self, title: &str, text: &str) -> Result<String> {
        (**self).convert_text_to_html(title, text)
    }
}

/// In-memory wiki whose markup is already rendered HTML.
///
/// `convert_text_to_html` returns its input unchanged, which makes this
/// suitable for offline conversion of stored renderer output and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticApi {
    pages: HashMap<String, String>,
}

impl StaticApi {
    /// Create an empty wiki.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article.
    pub fn with_page(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_page(title, content);
        self
    }

    /// Add or replace an article.
    pub fn add_page(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.pages.insert(title.into(), content.into());
    }

    /// Number of stored articles.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl MediaWikiApi for StaticApi {
    fn get_content(&self, title: &str) -> Result<String> {
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| Error::Api(format!("article not found: {}", title)))
    }

    fn convert_text_to_html(&self, _title: &str, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
