//! Error types for tree parsing and filesystem materialization.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while recovering a tree from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Connector glyphs that do not form a recognizable branch or rail.
    #[error("malformed connector glyphs")]
    MalformedConnector,

    /// Nothing left after stripping connectors and directory markers.
    #[error("entry has an empty name")]
    EmptyName,

    /// A line nested more than one level below its parent.
    #[error("indentation jumps from level {from} to level {to}")]
    IndentationJump { from: usize, to: usize },

    /// A line indented less than the first entry of the tree.
    #[error("indentation is shallower than the root of the tree")]
    AboveRoot,

    /// Indentation width that does not land on a nesting level.
    #[error("indentation of {width} columns is not a multiple of {unit} (see --indent-width)")]
    Misaligned { width: usize, unit: usize },

    /// A name spanning more than one path segment.
    #[error("'{name}' contains a path separator; one name per line")]
    NestedPath { name: String },

    /// `.` and `..` would escape the node's parent.
    #[error("'{name}' is not a valid file or directory name")]
    ReservedName { name: String },

    /// Input without a single significant line or entry.
    #[error("input contains no entries")]
    NoEntries,

    /// JSON that serde_json rejected.
    #[error("invalid JSON: {message}")]
    Json { message: String },

    /// Valid JSON whose shape is not a tree layout.
    #[error("unsupported JSON layout: {message}")]
    JsonShape { message: String },
}

/// Structural problem in a tree description, with as much location context as
/// the input format provides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}{}", line_prefix(.line), .kind, text_suffix(.text))]
pub struct TreeParseError {
    pub kind: ParseErrorKind,
    /// 1-based line number of the offending line.
    pub line: Option<usize>,
    /// Raw text of the offending line (or JSON key).
    pub text: Option<String>,
}

impl TreeParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            line: None,
            text: None,
        }
    }

    pub fn at_line(kind: ParseErrorKind, line: usize, text: &str) -> Self {
        Self {
            kind,
            line: Some(line),
            text: Some(text.to_string()),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl From<ParseErrorKind> for TreeParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("line {n}: "),
        None => String::new(),
    }
}

fn text_suffix(text: &Option<String>) -> String {
    match text {
        Some(t) => format!(": {t:?}"),
        None => String::new(),
    }
}

/// Failure while creating the parsed structure on disk.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{}: filesystem operation failed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: exists and is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: exists and is not a regular file", .path.display())]
    NotAFile { path: PathBuf },
}
