//! DOM Module - owned SSML tree
//!
//! - Node / Element: the two-variant tree produced by a parse
//! - Document: root validation, recursive descent, content splitting
//! - Text: flattening a tree back to plain text

pub mod document;
pub mod node;
pub mod text;

pub use document::parse;
pub use node::{Element, Node};
pub use text::flatten;
