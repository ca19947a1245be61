//! Tree model, input-format dispatch, and the tree-text parser.

pub(crate) mod classify;
pub mod layout;
pub(crate) mod normalize;
mod parse;
pub mod root;

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::error::TreeParseError;

pub use layout::{render_tree, GlyphStyle};
pub use parse::parse_tree_text;
pub use root::{base_dir_name, should_skip_root};

/// Whether a node becomes a directory or a regular file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry of a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Single path segment; empty only for a synthetic root.
    pub name: String,
    pub kind: NodeKind,
    /// Children in source order. Always empty for files.
    pub children: Vec<Node>,
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// A root invented to hold several top-level entries.
    pub fn is_synthetic(&self) -> bool {
        self.name.is_empty()
    }

    /// Pre-order traversal starting with `self` at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![WalkEntry {
                node: self,
                depth: 0,
                is_last: true,
            }],
        }
    }

    /// Number of (directories, files) below this node, not counting itself.
    pub fn counts(&self) -> (usize, usize) {
        self.walk()
            .skip(1)
            .fold((0, 0), |(dirs, files), entry| match entry.node.kind {
                NodeKind::Directory => (dirs + 1, files),
                NodeKind::File => (dirs, files + 1),
            })
    }
}

/// One step of a [`Walk`].
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    pub node: &'a Node,
    /// Nesting depth (0 = the node `walk` was called on).
    pub depth: usize,
    /// Whether this is the last child of its parent.
    pub is_last: bool,
}

/// Explicit-stack pre-order iterator; parents are always yielded before their
/// descendants.
pub struct Walk<'a> {
    stack: Vec<WalkEntry<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        let count = entry.node.children.len();
        for (i, child) in entry.node.children.iter().enumerate().rev() {
            self.stack.push(WalkEntry {
                node: child,
                depth: entry.depth + 1,
                is_last: i + 1 == count,
            });
        }
        Some(entry)
    }
}

/// Result of parsing: the tree plus the name of its root line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTree {
    pub root: Node,
    /// Name of the single top-level entry, or `""` for a synthetic root.
    pub root_name: String,
}

/// Knobs for the tree-text parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Columns per nesting level when the input uses plain indentation
    /// without connector glyphs. Also the width of a tab.
    pub indent_width: usize,
    /// Ignore `#` comment lines and strip trailing ` # ...` remarks.
    pub comments: bool,
}

pub const DEFAULT_INDENT_WIDTH: usize = 4;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            comments: true,
        }
    }
}

/// Supported input syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Indented tree diagram with box-drawing or ASCII connectors.
    #[value(name = "txt")]
    Text,
    /// Nested JSON objects or entry arrays.
    #[value(name = "json")]
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to tree text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }

    /// Parse already-loaded input in this format.
    pub fn build_tree(
        &self,
        input: &str,
        options: &ParseOptions,
    ) -> Result<ParsedTree, TreeParseError> {
        match self {
            InputFormat::Text => parse_tree_text(input, options),
            InputFormat::Json => crate::json::parse_tree_json(input),
        }
    }
}

/// Read `path` and parse it in the given format.
pub fn load_tree(
    path: &Path,
    format: InputFormat,
    options: &ParseOptions,
) -> anyhow::Result<ParsedTree> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("{}: failed to read tree file", path.display()))?;
    let parsed = format
        .build_tree(&input, options)
        .with_context(|| format!("{}: failed to parse tree", path.display()))?;
    Ok(parsed)
}
