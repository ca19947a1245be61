//! Name normalization shared by the text and JSON backends.

use super::NodeKind;
use crate::error::ParseErrorKind;

const SEPARATORS: &[char] = &['/', '\\'];

/// A validated single-segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedName {
    pub name: String,
    /// The raw name carried a trailing directory marker.
    pub marked_dir: bool,
}

/// Strip trailing directory markers and reject names that are not exactly one
/// path segment.
pub(crate) fn normalize_name(raw: &str) -> Result<NormalizedName, ParseErrorKind> {
    let trimmed = raw.trim();
    let name = trimmed.trim_end_matches(SEPARATORS).trim_end();
    let marked_dir = name.len() != trimmed.len();

    if name.is_empty() {
        return Err(ParseErrorKind::EmptyName);
    }
    if name.contains(SEPARATORS) {
        return Err(ParseErrorKind::NestedPath {
            name: name.to_string(),
        });
    }
    if name == "." || name == ".." {
        return Err(ParseErrorKind::ReservedName {
            name: name.to_string(),
        });
    }

    Ok(NormalizedName {
        name: name.to_string(),
        marked_dir,
    })
}

/// Children always win; otherwise only an explicit marker makes a directory.
pub(crate) fn resolve_kind(marked_dir: bool, has_children: bool) -> NodeKind {
    if marked_dir || has_children {
        NodeKind::Directory
    } else {
        NodeKind::File
    }
}
