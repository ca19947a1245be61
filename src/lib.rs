#![forbid(unsafe_code)]
//! tree2fs: scaffold directories and files from a tree diagram or JSON layout.

pub mod builder;
pub mod cli;
pub mod error;
pub mod json;
pub mod render;
pub mod tree;

pub use error::{BuildError, ParseErrorKind, TreeParseError};
pub use tree::{load_tree, InputFormat, Node, NodeKind, ParseOptions, ParsedTree};
