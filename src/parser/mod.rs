//! Markup parsing module.

mod html;
mod options;
mod serialize;

pub use html::HtmlParser;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use serialize::to_html;
