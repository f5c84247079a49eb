//! Document model types for wiki article content.
//!
//! A single closed [`Node`] enum carries both the generic markup tree produced
//! by the parser (`Element`/`Text`) and the semantic nodes produced by the
//! rewrite stages. While the pipeline runs the two kinds are mixed; a fully
//! converted [`Document`] only keeps raw elements inside `Unrecognized`.

mod document;
mod element;
mod node;

pub use document::Document;
pub use element::{Attributes, Element};
pub use node::{Node, ParamValue, Params, StyleKind};
