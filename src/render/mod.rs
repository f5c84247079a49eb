//! Output formats for converted documents.

mod json;

pub use json::{from_json, to_json, JsonFormat};
