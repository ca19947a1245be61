#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tree2fs::tree::parse_tree_text;
use tree2fs::{Node, ParseOptions, ParsedTree, TreeParseError};
use walkdir::WalkDir;

/// Parse tree text with default options.
pub fn parse(input: &str) -> Result<ParsedTree, TreeParseError> {
    parse_tree_text(input, &ParseOptions::default())
}

/// Names of the direct children of `node`.
pub fn child_names(node: &Node) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}

/// Find a descendant by slash-separated path relative to `node`.
pub fn find<'a>(node: &'a Node, path: &str) -> Option<&'a Node> {
    path.split('/').try_fold(node, |current, segment| {
        current.children.iter().find(|c| c.name == segment)
    })
}

/// Write `content` into a fresh temp dir and return (dir, file path).
pub fn write_tree_file(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path)
}

/// Every path under `root`, relative, with a trailing '/' for directories,
/// sorted for stable comparison.
pub fn list_fs(root: &Path) -> Vec<String> {
    let mut out: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if entry.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    out.sort();
    out
}

pub const PROJECT_TREE: &str = "\
project/
├── README.md
├── src/
│   ├── main.py
│   └── utils.py
└── tests/
    └── test_main.py
";
