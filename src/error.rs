//! Error types for wiki2doc library.

use thiserror::Error;

/// Result type alias for wiki2doc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning an article into a document tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The markup is not a well-formed tree (unbalanced tags, leading text).
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Embedded metadata of a transclusion, formula or figure is unusable.
    #[error("Malformed template metadata: {0}")]
    MalformedMetadata(String),

    /// Nesting or template expansion went deeper than the configured limit.
    #[error("Recursion limit of {0} exceeded")]
    RecursionLimit(usize),

    /// Two dispatch tables registered a handler for the same discriminant.
    #[error("Duplicate handler for `{0}`")]
    DuplicateHandler(String),

    /// The wiki collaborator failed to deliver content.
    #[error("Wiki API error: {0}")]
    Api(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedDocument(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}
